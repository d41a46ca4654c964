//! Bot command handlers and dispatch.

mod help;
mod history;
mod post;
mod query;
mod remove;

pub use help::HelpCommand;
pub use history::{DaysAgoCommand, LastWeekCommand, YesterdayCommand};
pub use post::PostUpdateCommand;
pub use query::{AllUpdatesCommand, UserUpdatesCommand};
pub use remove::{RemoveDayCommand, RemoveRoomCommand, RemoveUserCommand};

use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::ChatMessage;
use regex::{Captures, Regex};
use std::sync::Arc;
use tracing::debug;
use update_store::UpdateStore;

/// A chat command.
///
/// Each command owns its trigger pattern. Patterns are anchored on both
/// ends and matched against the whole address-stripped message, so a short
/// phrase can never fire on the prefix of a longer one.
#[async_trait]
pub trait Command: Send + Sync {
    /// Command name used in logs.
    fn name(&self) -> &'static str;

    /// Anchored, case-insensitive trigger pattern.
    fn pattern(&self) -> &Regex;

    /// Execute the command with the pattern's captures.
    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String>;
}

/// Ordered command table.
///
/// Dispatch walks the table in order and runs the first command whose
/// pattern matches. Longer phrasings are registered ahead of the shorter
/// commands they extend.
pub struct Dispatcher {
    commands: Vec<Box<dyn Command>>,
    bot_name: String,
}

impl Dispatcher {
    /// Build the full command table over one shared store.
    pub fn new(store: Arc<UpdateStore>, bot_name: impl Into<String>) -> Self {
        let bot_name = bot_name.into();
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(HelpCommand::new(bot_name.clone())),
            Box::new(PostUpdateCommand::new(store.clone())),
            Box::new(RemoveDayCommand::new(store.clone())),
            Box::new(RemoveUserCommand::new(store.clone())),
            Box::new(RemoveRoomCommand::new(store.clone())),
            Box::new(LastWeekCommand::new(store.clone())),
            Box::new(YesterdayCommand::new(store.clone())),
            Box::new(DaysAgoCommand::new(store.clone())),
            Box::new(UserUpdatesCommand::new(store.clone())),
            Box::new(AllUpdatesCommand::new(store)),
        ];

        Self { commands, bot_name }
    }

    /// Number of registered commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Route one incoming message to its command.
    ///
    /// Returns `None` when no command matches; the bot stays silent on
    /// ordinary room chatter.
    pub async fn dispatch(&self, message: &ChatMessage) -> Option<AppResult<String>> {
        let text = strip_address(&message.text, &self.bot_name);

        for command in &self.commands {
            if let Some(args) = command.pattern().captures(text) {
                debug!(
                    "Dispatching {} for {} in {}",
                    command.name(),
                    message.user,
                    message.room
                );
                return Some(command.run(message, &args).await);
            }
        }

        None
    }
}

/// Strip a leading address to the bot, like `standup ...`, `@standup ...`
/// or `standup: ...`, plus surrounding whitespace.
///
/// Unaddressed text passes through unchanged, so commands also work in
/// rooms where people drop the bot's name.
fn strip_address<'a>(text: &'a str, bot_name: &str) -> &'a str {
    let text = text.trim();
    let candidate = text.strip_prefix('@').unwrap_or(text);

    if candidate.len() >= bot_name.len()
        && candidate.as_bytes()[..bot_name.len()].eq_ignore_ascii_case(bot_name.as_bytes())
    {
        let rest = &candidate[bot_name.len()..];
        let mut chars = rest.chars();
        match chars.next() {
            None => return "",
            Some(':') | Some(',') => return chars.as_str().trim(),
            Some(c) if c.is_whitespace() => return rest.trim(),
            _ => {}
        }
    }

    text
}
