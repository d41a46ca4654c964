//! Chat gateway REST API client.
//!
//! The gateway is the bot's window into the chat service: it queues
//! incoming room messages per bot account and delivers outgoing replies.

mod client;
mod error;
mod receiver;
mod types;

pub use client::ChatClient;
pub use error::ChatError;
pub use receiver::MessageReceiver;
pub use types::*;
