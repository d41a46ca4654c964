//! Per-room update storage layered over an injected brain.

use crate::brain::Brain;
use crate::error::StoreError;
use crate::types::RoomRecord;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Namespace prefix for room keys in the brain.
const KEY_PREFIX: &str = "daily-updates";

/// Outcome of removing one user's updates for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRemoval {
    /// The user never stored anything in this room.
    UnknownUser,
    /// The user exists but had nothing on that date.
    NothingOnDate,
    /// The date's sequence was emptied.
    Cleared,
}

/// Update storage for all rooms, keyed per room in a [`Brain`].
///
/// Every mutation is a read-modify-write cycle against one room key. The
/// cycle runs under a store-wide lock so interleaved writers cannot lose
/// updates; reads go straight to the brain.
pub struct UpdateStore {
    brain: Arc<dyn Brain>,
    write_lock: Mutex<()>,
}

impl UpdateStore {
    pub fn new(brain: Arc<dyn Brain>) -> Self {
        Self {
            brain,
            write_lock: Mutex::new(()),
        }
    }

    fn key(room: &str) -> String {
        format!("{}:{}", KEY_PREFIX, room)
    }

    /// The room's record, or the empty record when nothing is stored yet.
    #[instrument(skip(self))]
    pub async fn record(&self, room: &str) -> Result<RoomRecord, StoreError> {
        match self.brain.get(&Self::key(room)).await? {
            None | Some(Value::Null) => Ok(RoomRecord::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    async fn persist(&self, room: &str, record: &RoomRecord) -> Result<(), StoreError> {
        let value = serde_json::to_value(record)?;
        self.brain.set(&Self::key(room), value).await
    }

    /// Replace `user`'s update for `date` in `room` with `text`.
    #[instrument(skip(self, text))]
    pub async fn post_update(
        &self,
        room: &str,
        user: &str,
        date: &str,
        text: &str,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.record(room).await?;
        record.set_update(user, date, text);
        self.persist(room, &record).await?;
        debug!("Stored update by {} in {} for {}", user, room, date);
        Ok(())
    }

    /// Empty `user`'s sequence for `date` in `room`, keeping other days.
    #[instrument(skip(self))]
    pub async fn remove_day(
        &self,
        room: &str,
        user: &str,
        date: &str,
    ) -> Result<DayRemoval, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.record(room).await?;
        if record.user(user).is_none() {
            return Ok(DayRemoval::UnknownUser);
        }
        if !record.clear_day(user, date) {
            return Ok(DayRemoval::NothingOnDate);
        }
        self.persist(room, &record).await?;
        info!("Cleared {}'s updates for {} in {}", user, date, room);
        Ok(DayRemoval::Cleared)
    }

    /// Empty `user`'s whole day map in `room`.
    ///
    /// Returns whether the user was recorded at all.
    #[instrument(skip(self))]
    pub async fn remove_user(&self, room: &str, user: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.record(room).await?;
        if !record.clear_user(user) {
            return Ok(false);
        }
        self.persist(room, &record).await?;
        info!("Cleared all updates by {} in {}", user, room);
        Ok(true)
    }

    /// Delete the room's whole record. Returns whether one existed.
    #[instrument(skip(self))]
    pub async fn remove_room(&self, room: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.brain.remove(&Self::key(room)).await?;
        if removed {
            info!("Deleted the update record of {}", room);
        }
        Ok(removed)
    }
}
