//! Post command: store the sender's update for today.

use crate::commands::Command;
use crate::dates;
use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::ChatMessage;
use regex::{Captures, Regex};
use std::sync::Arc;
use update_store::UpdateStore;

/// Handles `my update is <text>`.
///
/// One update per person and day: posting again the same day replaces the
/// earlier text.
pub struct PostUpdateCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl PostUpdateCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            // (?s) so an update may span multiple lines
            pattern: Regex::new(r"(?is)^my update is\b\s*(.*)$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for PostUpdateCommand {
    fn name(&self) -> &'static str {
        "post-update"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let text = args.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if text.is_empty() {
            return Ok(format!(
                "Sorry {}, your update is empty. Try again",
                message.user
            ));
        }

        let today = dates::iso(dates::today());
        self.store
            .post_update(&message.room, &message.user, &today, text)
            .await?;

        Ok(format!("Saved today's update for {}", message.user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use update_store::MemoryBrain;

    fn command() -> PostUpdateCommand {
        PostUpdateCommand::new(Arc::new(UpdateStore::new(Arc::new(MemoryBrain::new()))))
    }

    fn message(text: &str) -> ChatMessage {
        ChatMessage {
            user: "alice".to_string(),
            room: "team-infra".to_string(),
            text: text.to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_pattern_captures_the_update_text() {
        let command = command();

        let args = command.pattern().captures("my update is Shipped feature X");
        assert_eq!(args.unwrap().get(1).unwrap().as_str(), "Shipped feature X");

        let args = command
            .pattern()
            .captures("MY UPDATE IS fixed the\nflaky test");
        assert_eq!(args.unwrap().get(1).unwrap().as_str(), "fixed the\nflaky test");

        assert!(command.pattern().captures("my update isn't ready").is_none());
    }

    #[tokio::test]
    async fn test_run_stores_todays_update() {
        let command = command();
        let message = message("my update is Shipped feature X");

        let args = command.pattern().captures(&message.text).unwrap();
        let reply = command.run(&message, &args).await.unwrap();

        assert_eq!(reply, "Saved today's update for alice");

        let record = command.store.record("team-infra").await.unwrap();
        let today = dates::iso(dates::today());
        assert_eq!(
            record.user("alice").unwrap().updates_on(&today),
            ["Shipped feature X".to_string()]
        );
    }

    #[tokio::test]
    async fn test_run_rejects_an_empty_update() {
        let command = command();
        let message = message("my update is   ");

        let args = command.pattern().captures(&message.text).unwrap();
        let reply = command.run(&message, &args).await.unwrap();

        assert_eq!(reply, "Sorry alice, your update is empty. Try again");

        let record = command.store.record("team-infra").await.unwrap();
        assert!(record.is_empty());
    }
}
