//! Daily standup update bot - main entry point.

use anyhow::Context;
use chat_client::{ChatClient, MessageReceiver};
use standup_bot::commands::Dispatcher;
use standup_bot::config::Config;
use standup_bot::error::AppResult;
use std::sync::Arc;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use update_store::{MemoryBrain, UpdateStore};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting standup bot...");

    // In-memory brain behind the store interface
    let store = Arc::new(UpdateStore::new(Arc::new(MemoryBrain::new())));

    let chat = ChatClient::new(&config.gateway.service_url, &config.bot.name)?;

    // Fail fast when the gateway is unreachable
    if !chat.health_check().await {
        error!(
            "Chat gateway at {} is not reachable",
            config.gateway.service_url
        );
        return Err(anyhow::anyhow!("Chat gateway health check failed").into());
    }
    info!("Connected to chat gateway at {}", config.gateway.service_url);

    let dispatcher = Dispatcher::new(store, config.bot.name.clone());
    info!(
        "Listening as {} with {} commands",
        config.bot.name,
        dispatcher.command_count()
    );

    // Start the message receiver
    let receiver = MessageReceiver::new(chat.clone(), config.gateway.poll_interval);
    let mut messages = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = messages.next() => {
                match dispatcher.dispatch(&message).await {
                    Some(Ok(reply)) => {
                        if let Err(e) = chat.reply(&message, &reply).await {
                            error!("Failed to send reply: {}", e);
                        }
                    }
                    Some(Err(e)) => {
                        error!("Command failed: {}", e);
                        let _ = chat
                            .reply(&message, "Sorry, something went wrong.")
                            .await;
                    }
                    // Not addressed to us
                    None => {}
                }
            }
            _ = signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
