//! Presence record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::room::{OUT, SOMEWHERE, normalize_key};

/// Stored presence state for one registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserPresenceRecord {
    /// Lowercase identity key.
    pub username: String,
    /// Display name given at registration.
    pub full_name: Option<String>,
    /// Whether the user is currently in the office.
    pub is_in_office: bool,
    /// Current room; `"out"` when not in the office.
    pub room: String,
    /// Every room transition, oldest first.
    pub room_history: Vec<String>,
    /// Date of the last accepted in-office report.
    pub last_present_date: Option<NaiveDate>,
}

impl UserPresenceRecord {
    /// A freshly registered user: out of the office with no history.
    pub fn registered(username: &str, full_name: Option<String>) -> Self {
        Self {
            username: normalize_key(username),
            full_name,
            is_in_office: false,
            room: OUT.to_string(),
            room_history: Vec::new(),
            last_present_date: None,
        }
    }

    /// In the office but not in a tracked room.
    pub fn is_somewhere(&self) -> bool {
        self.is_in_office && self.room == SOMEWHERE
    }

    /// Whether the user checked in on the given date.
    pub fn was_present_on(&self, date: NaiveDate) -> bool {
        self.last_present_date == Some(date)
    }

    /// Apply a change in place, as a store would.
    ///
    /// The caller is responsible for the room guard; this only mutates.
    pub fn apply(&mut self, change: &PresenceChange) {
        self.is_in_office = change.is_in_office;
        self.room = change.room.clone();
        if change.append_history {
            self.room_history.push(change.room.clone());
        }
        if let Some(date) = change.present_on {
            self.last_present_date = Some(date);
        }
    }
}

/// Registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username (normalized on write).
    pub username: String,
    /// Optional display name.
    pub full_name: Option<String>,
}

/// A validated write against the presence store, applied only when the
/// stored room differs from `room`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceChange {
    /// Normalized target room.
    pub room: String,
    /// Target presence flag.
    pub is_in_office: bool,
    /// Append `room` to the history in the same write.
    pub append_history: bool,
    /// Stamp `last_present_date` with this date.
    pub present_on: Option<NaiveDate>,
}
