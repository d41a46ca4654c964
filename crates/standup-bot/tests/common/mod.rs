//! Common test utilities for integration tests.

use chat_client::ChatMessage;
use standup_bot::commands::Dispatcher;
use std::sync::Arc;
use update_store::{MemoryBrain, UpdateStore};

/// Display name the bot is addressed by in these tests.
pub const BOT_NAME: &str = "standup";

/// A dispatcher over a fresh in-memory store, plus the store itself for
/// direct seeding and inspection.
pub fn test_dispatcher() -> (Arc<UpdateStore>, Dispatcher) {
    let store = Arc::new(UpdateStore::new(Arc::new(MemoryBrain::new())));
    let dispatcher = Dispatcher::new(store.clone(), BOT_NAME);

    (store, dispatcher)
}

/// An incoming room message as the gateway would deliver it.
pub fn message(user: &str, room: &str, text: &str) -> ChatMessage {
    ChatMessage {
        user: user.to_string(),
        room: room.to_string(),
        text: text.to_string(),
        timestamp: 1677652288000,
    }
}
