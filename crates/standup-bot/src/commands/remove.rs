//! Removal commands.

use crate::commands::Command;
use crate::dates;
use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::ChatMessage;
use regex::{Captures, Regex};
use std::sync::Arc;
use update_store::{DayRemoval, UpdateStore};

/// Handles `remove daily updates on <date> by <user>`.
pub struct RemoveDayCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl RemoveDayCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^remove daily updates on\s+(\S+)\s+by\b\s*(\w*)$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for RemoveDayCommand {
    fn name(&self) -> &'static str {
        "remove-day"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let token = args.get(1).map(|m| m.as_str()).unwrap_or("");
        let username = args.get(2).map(|m| m.as_str()).unwrap_or("");

        if username.is_empty() {
            return Ok("You need to supply a user name".to_string());
        }
        let Some(date) = dates::parse_iso(token) else {
            return Ok(format!(
                "Sorry, {} does not look like a YYYY-MM-DD date",
                token
            ));
        };

        // Render back to the canonical key so unpadded input still hits
        let date = dates::iso(date);
        let outcome = self
            .store
            .remove_day(&message.room, username, &date)
            .await?;

        Ok(match outcome {
            DayRemoval::UnknownUser => format!("{} had no updates anyway", username),
            DayRemoval::NothingOnDate => {
                format!("{} had no updates on {} anyway", username, date)
            }
            DayRemoval::Cleared => format!("Removed the updates of {} on {}", username, date),
        })
    }
}

/// Handles `remove daily updates by <user>`: clears everything the user
/// posted in the invoking room.
pub struct RemoveUserCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl RemoveUserCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^remove daily updates by\b\s*(\w*)$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for RemoveUserCommand {
    fn name(&self) -> &'static str {
        "remove-user"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let username = args.get(1).map(|m| m.as_str()).unwrap_or("");
        if username.is_empty() {
            return Ok("You need to supply a user name".to_string());
        }

        if self.store.remove_user(&message.room, username).await? {
            Ok(format!("Removed all updates by {}", username))
        } else {
            Ok(format!("{} had no updates anyway", username))
        }
    }
}

/// Handles `remove daily updates for room`: deletes the invoking room's
/// whole record.
pub struct RemoveRoomCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl RemoveRoomCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^remove daily updates for room$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for RemoveRoomCommand {
    fn name(&self) -> &'static str {
        "remove-room"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, _args: &Captures<'_>) -> AppResult<String> {
        self.store.remove_room(&message.room).await?;

        Ok(format!("Removed all daily updates of {}", message.room))
    }
}
