//! Query commands for past days.

use crate::commands::Command;
use crate::dates;
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use chat_client::ChatMessage;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::Arc;
use update_store::UpdateStore;

/// All-users report for one resolved calendar day.
async fn day_report(
    store: &UpdateStore,
    room: &str,
    date: Option<NaiveDate>,
) -> AppResult<String> {
    let Some(date) = date else {
        return Ok("That is further back than my calendar goes".to_string());
    };

    let record = store.record(room).await?;
    Ok(render::room_day_report(&record, &dates::iso(date)))
}

/// Handles `get all daily updates for yesterday`.
pub struct YesterdayCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl YesterdayCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^get all daily updates for yesterday$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for YesterdayCommand {
    fn name(&self) -> &'static str {
        "yesterday-updates"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, _args: &Captures<'_>) -> AppResult<String> {
        day_report(&self.store, &message.room, dates::back(dates::today(), 1)).await
    }
}

/// Handles `get all daily updates for <N> days ago`.
///
/// `0 days ago` is valid and reads as today.
pub struct DaysAgoCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl DaysAgoCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^get all daily updates for (\d+) days ago$").unwrap(),
        }
    }
}

#[async_trait]
impl Command for DaysAgoCommand {
    fn name(&self) -> &'static str {
        "days-ago-updates"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let token = args.get(1).map(|m| m.as_str()).unwrap_or("");
        let Ok(days) = token.parse::<u64>() else {
            return Ok(format!(
                "Sorry, {} is not a day count I can work with",
                token
            ));
        };

        day_report(
            &self.store,
            &message.room,
            dates::back(dates::today(), days),
        )
        .await
    }
}

/// Handles `get all daily updates for last week for <room>`.
///
/// The report covers the named room, wherever the request came from, and
/// walks the last eight days oldest first.
pub struct LastWeekCommand {
    store: Arc<UpdateStore>,
    pattern: Regex,
}

impl LastWeekCommand {
    pub fn new(store: Arc<UpdateStore>) -> Self {
        Self {
            store,
            pattern: Regex::new(r"(?i)^get all daily updates for last week for\s+([\w#-]+)$")
                .unwrap(),
        }
    }
}

#[async_trait]
impl Command for LastWeekCommand {
    fn name(&self) -> &'static str {
        "last-week-updates"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    async fn run(&self, _message: &ChatMessage, args: &Captures<'_>) -> AppResult<String> {
        let room = args.get(1).map(|m| m.as_str()).unwrap_or("");
        let record = self.store.record(room).await?;

        let window: Vec<String> = dates::week_ending(dates::today())
            .into_iter()
            .map(dates::iso)
            .collect();

        Ok(render::multi_day_report(&record, &window))
    }
}
