//! Presence registration, updates and lookups.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use locator_core::error::AppError;
use locator_core::traits::Clock;
use locator_database::store::{ConditionalWrite, PresenceStore};
use locator_entity::presence::{
    NewUser, OUT, PresenceChange, SOMEWHERE, UserPresenceRecord, normalize_key,
};

use super::favorite::favorite_room;

/// A location report from a device or check-in client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    /// Who is reporting.
    pub username: String,
    /// Whether they are in the office.
    pub is_in_office: bool,
    /// Their room; ignored when `is_in_office` is false.
    #[serde(default)]
    pub room: Option<String>,
}

/// What a presence update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOutcome {
    /// The new state was written.
    Applied,
    /// The stored room already matched; nothing changed.
    Unchanged,
}

/// Applies presence changes and answers record lookups.
#[derive(Debug, Clone)]
pub struct PresenceService {
    /// Presence store.
    store: Arc<dyn PresenceStore>,
    /// Source of "today" for check-in stamping.
    clock: Arc<dyn Clock>,
}

impl PresenceService {
    /// Creates a new presence service.
    pub fn new(store: Arc<dyn PresenceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Registers a user: out of the office, empty history.
    pub async fn register(&self, user: NewUser) -> Result<UserPresenceRecord, AppError> {
        let username = normalize_key(&user.username);
        if username.is_empty() {
            return Err(AppError::invalid_argument("username"));
        }

        let full_name = user
            .full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let record = UserPresenceRecord::registered(&username, full_name);
        self.store.put_new(&record).await?;

        info!(username = %record.username, "User registered");
        Ok(record)
    }

    /// Applies a location report.
    ///
    /// The write is guarded on the stored room differing from the target,
    /// so repeated or concurrent identical reports collapse into a single
    /// applied write and the rest come back as [`UpdateOutcome::Unchanged`].
    pub async fn update_location(&self, report: LocationReport) -> Result<UpdateOutcome, AppError> {
        let username = normalize_key(&report.username);
        if username.is_empty() {
            return Err(AppError::invalid_argument("username"));
        }

        let change = self.plan_change(report.is_in_office, report.room.as_deref())?;

        match self.store.update_if_room_differs(&username, &change).await? {
            ConditionalWrite::Applied => {
                info!(
                    username = %username,
                    room = %change.room,
                    is_in_office = change.is_in_office,
                    history_appended = change.append_history,
                    "Presence updated"
                );
                Ok(UpdateOutcome::Applied)
            }
            ConditionalWrite::PredicateFailed => {
                debug!(username = %username, room = %change.room, "Presence unchanged");
                Ok(UpdateOutcome::Unchanged)
            }
        }
    }

    /// Fetches a user's record; `NotFound` if unregistered.
    pub async fn get(&self, username: &str) -> Result<UserPresenceRecord, AppError> {
        let username = normalize_key(username);
        self.store
            .get(&username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
    }

    /// All registered usernames, sorted.
    pub async fn list_usernames(&self) -> Result<Vec<String>, AppError> {
        let mut names = self.store.scan_usernames().await?;
        names.sort();
        Ok(names)
    }

    /// The user's most visited room, if any.
    pub async fn favorite_room(&self, username: &str) -> Result<Option<String>, AppError> {
        let record = self.get(username).await?;
        Ok(favorite_room(&record.room_history))
    }

    /// Validate the report and build the store write, before any I/O.
    fn plan_change(&self, is_in_office: bool, room: Option<&str>) -> Result<PresenceChange, AppError> {
        let room = if is_in_office {
            let room = room.map(normalize_key).unwrap_or_default();
            if room.is_empty() || room == OUT {
                return Err(AppError::invalid_argument("room"));
            }
            room
        } else {
            OUT.to_string()
        };

        Ok(PresenceChange {
            append_history: room != SOMEWHERE,
            present_on: is_in_office.then(|| self.clock.today()),
            room,
            is_in_office,
        })
    }
}
