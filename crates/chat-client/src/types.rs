//! Chat gateway API types.

use serde::{Deserialize, Serialize};

/// Incoming gateway message.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Username of the sender.
    pub source: String,
    /// Room the message was posted in.
    pub room: String,
    pub timestamp: i64,
    #[serde(rename = "dataMessage")]
    pub data_message: Option<DataMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataMessage {
    pub message: Option<String>,
    pub timestamp: i64,
}

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub room: String,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Username that sent the message.
    pub user: String,
    /// Room the message came from.
    pub room: String,
    /// The message text.
    pub text: String,
    /// Message timestamp.
    pub timestamp: i64,
}

impl ChatMessage {
    /// Extract a bot-processable message from an incoming envelope.
    ///
    /// Envelopes without message text (delivery receipts, typing events,
    /// reactions) yield `None`.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let data = msg.envelope.data_message.as_ref()?;
        let text = data.message.clone()?;

        Some(Self {
            user: msg.envelope.source.clone(),
            room: msg.envelope.room.clone(),
            text,
            timestamp: msg.envelope.timestamp,
        })
    }
}
