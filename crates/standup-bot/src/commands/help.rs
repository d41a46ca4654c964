//! Help command.

use crate::commands::Command;
use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::ChatMessage;
use regex::{Captures, Regex};

/// Handles `daily update help`: lists every phrase the bot answers to,
/// prefixed with the name it is addressed by.
pub struct HelpCommand {
    bot_name: String,
    pattern: Regex,
}

impl HelpCommand {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            pattern: Regex::new(r"(?i)^daily update help$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, _message: &ChatMessage, _args: &Captures<'_>) -> AppResult<String> {
        let name = &self.bot_name;
        let lines = [
            "I'll store your status updates!".to_string(),
            "I keep one update per person and day; posting again replaces the earlier one.".to_string(),
            String::new(),
            format!("{} my update is <text> - Store your update for today", name),
            format!("{} get daily updates by <user> - Today's update of one user", name),
            format!("{} get daily updates - Today's updates of everyone in this room", name),
            format!("{} get all daily updates for yesterday - Yesterday's updates of everyone", name),
            format!("{} get all daily updates for <N> days ago - Updates of everyone N days back", name),
            format!("{} get all daily updates for last week for <room> - Day-by-day report of a room's last week", name),
            format!("{} remove daily updates on <date> by <user> - Clear one user's update for a YYYY-MM-DD date", name),
            format!("{} remove daily updates by <user> - Clear everything one user posted here", name),
            format!("{} remove daily updates for room - Forget this room completely", name),
            format!("{} daily update help - This message", name),
        ];

        Ok(lines.join("\n"))
    }
}
