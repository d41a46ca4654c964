//! Chat gateway HTTP client.

use crate::error::ChatError;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Chat gateway REST API client.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    bot_name: String,
}

impl ChatClient {
    /// Create a new gateway client.
    pub fn new(
        base_url: impl Into<String>,
        bot_name: impl Into<String>,
    ) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            bot_name: bot_name.into(),
        })
    }

    /// The bot account messages are received for.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Check if the gateway is healthy.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Drain pending messages addressed to the bot account.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, ChatError> {
        let encoded_name = encode(&self.bot_name);
        let response = self
            .client
            .get(format!("{}/v1/receive/{}", self.base_url, encoded_name))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(ChatError::Api(msg));
        }

        let messages: Vec<IncomingMessage> = response.json().await?;
        debug!("Received {} messages", messages.len());
        Ok(messages)
    }

    /// Send a message into a room.
    #[instrument(skip(self, message))]
    pub async fn send(&self, room: &str, message: &str) -> Result<(), ChatError> {
        let request = SendMessageRequest {
            message: message.to_string(),
            room: room.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/v1/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(ChatError::SendFailed(msg));
        }

        debug!("Sent message to {}", room);
        Ok(())
    }

    /// Reply into the room a message came from.
    pub async fn reply(&self, original: &ChatMessage, message: &str) -> Result<(), ChatError> {
        self.send(&original.room, message).await
    }
}
