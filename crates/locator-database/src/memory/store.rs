//! In-memory presence store using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use locator_core::error::AppError;
use locator_core::result::AppResult;
use locator_entity::presence::{PresenceChange, UserPresenceRecord};

use crate::store::{ConditionalWrite, PresenceStore};

/// In-process presence store.
///
/// Each key's shard lock is held across the room check and the write, which
/// gives the same all-or-nothing guard as the database statement.
#[derive(Debug, Clone, Default)]
pub struct MemoryPresenceStore {
    records: Arc<DashMap<String, UserPresenceRecord>>,
}

impl MemoryPresenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PresenceStore for MemoryPresenceStore {
    async fn get(&self, username: &str) -> AppResult<Option<UserPresenceRecord>> {
        Ok(self.records.get(username).map(|r| r.value().clone()))
    }

    async fn put_new(&self, record: &UserPresenceRecord) -> AppResult<()> {
        match self.records.entry(record.username.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "User '{}' already exists",
                record.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn update_if_room_differs(
        &self,
        username: &str,
        change: &PresenceChange,
    ) -> AppResult<ConditionalWrite> {
        let mut record = self
            .records
            .get_mut(username)
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        if record.room == change.room {
            debug!(username, room = %change.room, "Room unchanged, write skipped");
            return Ok(ConditionalWrite::PredicateFailed);
        }

        record.apply(change);
        Ok(ConditionalWrite::Applied)
    }

    async fn scan_usernames(&self) -> AppResult<Vec<String>> {
        Ok(self.records.iter().map(|r| r.key().clone()).collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
