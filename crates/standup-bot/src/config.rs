//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Chat gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Bot identity and logging configuration
    #[serde(default)]
    pub bot: BotConfig,
}

/// Chat gateway connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Chat gateway REST API endpoint
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// How often to poll the gateway for new messages
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name the bot is addressed by in chat
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_url() -> String {
    "http://chat-api:8080".to_string()
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(200)
}

fn default_bot_name() -> String {
    "standup".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables use a `SECTION__FIELD` shape, e.g. `GATEWAY__SERVICE_URL`
    /// or `BOT__NAME`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Note: Do NOT use try_parsing(true), it would turn a
                    // numeric bot or room name into a number
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(config)
    }
}
