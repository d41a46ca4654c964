//! Room and user update records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All updates stored for one user, keyed by ISO `YYYY-MM-DD` date.
///
/// Each date maps to the updates posted that day, oldest first. Under the
/// current overwrite policy the sequence holds at most one entry, but the
/// stored shape stays a sequence so an append policy needs no migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub days: BTreeMap<String, Vec<String>>,
}

impl UserRecord {
    /// Updates posted on `date`, oldest first. Absent dates read as empty.
    pub fn updates_on(&self, date: &str) -> &[String] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether anything is stored for `date`.
    pub fn has_updates_on(&self, date: &str) -> bool {
        !self.updates_on(date).is_empty()
    }
}

/// A room's stored updates, keyed by username.
///
/// `BTreeMap` keys keep report output deterministic: users iterate in
/// lexicographic order, dates in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub users: BTreeMap<String, UserRecord>,
}

impl RoomRecord {
    /// Whether any user was ever recorded in this room.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up one user's record.
    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Replace `username`'s entry for `date` with the single `text`.
    ///
    /// Posting twice on the same day keeps only the second update.
    pub fn set_update(&mut self, username: &str, date: &str, text: impl Into<String>) {
        self.users
            .entry(username.to_string())
            .or_default()
            .days
            .insert(date.to_string(), vec![text.into()]);
    }

    /// Empty `username`'s sequence for `date`, keeping the date key.
    ///
    /// Returns false when the user had nothing stored for that date.
    pub fn clear_day(&mut self, username: &str, date: &str) -> bool {
        match self.users.get_mut(username) {
            Some(user) if user.has_updates_on(date) => {
                user.days.insert(date.to_string(), Vec::new());
                true
            }
            _ => false,
        }
    }

    /// Empty `username`'s whole day map, keeping the username key.
    ///
    /// Returns false when the user was never recorded.
    pub fn clear_user(&mut self, username: &str) -> bool {
        match self.users.get_mut(username) {
            Some(user) => {
                user.days.clear();
                true
            }
            None => false,
        }
    }
}
