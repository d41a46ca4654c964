//! Query commands for today's updates.

use crate::commands::Command;
use crate::dates;
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use chat_client::ChatMessage;
use regex::{Captures, Regex};
use std::sync::Arc;
use update_store::UpdateStore;

/// Handles `get daily updates by <user>`: one user's update for today.
pub struct UserUpdatesCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl UserUpdatesCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            // \w* instead of \w+ so a bare "get daily updates by" still
            // matches and gets the missing-name reply
            pattern: Regex::new(r"(?i)^get daily updates by\b\s*(\w*)$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for UserUpdatesCommand {
    fn name(&self) -> &'static str {
        "user-updates"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let username = args.get(1).map(|m| m.as_str()).unwrap_or("");
        if username.is_empty() {
            return Ok("You need to supply a user name".to_string());
        }

        let record = self.store.record(&message.room).await?;
        let Some(user) = record.user(username) else {
            return Ok("This user does not exist or has never stored any updates".to_string());
        };

        let today = dates::iso(dates::today());
        let updates = user.updates_on(&today);
        if updates.is_empty() {
            return Ok("No daily updates for this user yet".to_string());
        }

        Ok(render::user_day_block(username, &today, updates))
    }
}

/// Handles the bare `get daily updates`: today's updates for everyone in
/// the invoking room.
pub struct AllUpdatesCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl AllUpdatesCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^get daily updates$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for AllUpdatesCommand {
    fn name(&self) -> &'static str {
        "all-updates"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, _args: &Captures<'_>) -> AppResult<String> {
        let record = self.store.record(&message.room).await?;
        let today = dates::iso(dates::today());

        Ok(render::room_day_report(&record, &today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use update_store::MemoryBrain;

    fn store() -> Arc<UpdateStore> {
        Arc::new(UpdateStore::new(Arc::new(MemoryBrain::new())))
    }

    fn message(text: &str) -> ChatMessage {
        ChatMessage {
            user: "alice".to_string(),
            room: "team-infra".to_string(),
            text: text.to_string(),
            timestamp: 0,
        }
    }

    async fn run(command: &dyn Command, text: &str) -> String {
        let message = message(text);
        let args = command.pattern().captures(&message.text).unwrap();
        command.run(&message, &args).await.unwrap()
    }

    #[tokio::test]
    async fn test_user_query_needs_a_user_name() {
        let command = UserUpdatesCommand::new(store());

        let reply = run(&command, "get daily updates by").await;

        assert_eq!(reply, "You need to supply a user name");
    }

    #[tokio::test]
    async fn test_user_query_reports_unknown_users() {
        let command = UserUpdatesCommand::new(store());

        let reply = run(&command, "get daily updates by bob").await;

        assert_eq!(
            reply,
            "This user does not exist or has never stored any updates"
        );
    }

    #[tokio::test]
    async fn test_user_query_reports_a_day_without_updates() {
        let store = store();
        store
            .post_update("team-infra", "bob", "2001-01-01", "Ancient history")
            .await
            .unwrap();
        let command = UserUpdatesCommand::new(store);

        let reply = run(&command, "get daily updates by bob").await;

        assert_eq!(reply, "No daily updates for this user yet");
    }

    #[tokio::test]
    async fn test_user_query_renders_todays_update() {
        let store = store();
        let today = dates::iso(dates::today());
        store
            .post_update("team-infra", "bob", &today, "Shipped feature X")
            .await
            .unwrap();
        let command = UserUpdatesCommand::new(store);

        let reply = run(&command, "get daily updates by bob").await;

        assert_eq!(
            reply,
            format!("Daily update of {} for bob:\n```\n- Shipped feature X\n```", today)
        );
    }

    #[tokio::test]
    async fn test_room_query_on_an_empty_room() {
        let command = AllUpdatesCommand::new(store());

        let reply = run(&command, "get daily updates").await;

        assert_eq!(
            reply,
            format!("No updates for {} yet", dates::iso(dates::today()))
        );
    }

    #[tokio::test]
    async fn test_room_query_lists_every_recorded_user() {
        let store = store();
        let today = dates::iso(dates::today());
        store
            .post_update("team-infra", "bob", &today, "Reviewed PRs")
            .await
            .unwrap();
        store
            .post_update("team-infra", "alice", "2001-01-01", "Ancient history")
            .await
            .unwrap();
        let command = AllUpdatesCommand::new(store);

        let reply = run(&command, "get daily updates").await;

        assert_eq!(
            reply,
            format!(
                "Updates for alice on {}:\n- No updates yet\n\
                 Updates for bob on {}:\n- Reviewed PRs\n",
                today, today
            )
        );
    }
}
