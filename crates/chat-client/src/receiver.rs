//! Message receiver with polling.

use crate::client::ChatClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

/// Message receiver that polls the gateway for new messages.
pub struct MessageReceiver {
    client: ChatClient,
    poll_interval: Duration,
}

impl MessageReceiver {
    /// Create a new message receiver.
    pub fn new(client: ChatClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Start receiving messages as an async stream.
    pub fn stream(self) -> impl Stream<Item = ChatMessage> {
        async_stream::stream! {
            loop {
                match self.client.receive().await {
                    Ok(messages) => {
                        for msg in messages {
                            if let Some(chat_msg) = ChatMessage::from_incoming(&msg) {
                                let preview: String = chat_msg.text.chars().take(50).collect();
                                debug!("Received from {} in {}: {}",
                                    chat_msg.user,
                                    chat_msg.room,
                                    preview
                                );
                                yield chat_msg;
                            }
                        }
                    }
                    Err(e) => {
                        error!("Receive error: {}", e);
                        // Back off on error
                        sleep(Duration::from_secs(5)).await;
                        continue;
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}
