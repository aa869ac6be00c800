//! Response DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use locator_entity::presence::UserPresenceRecord;
use locator_service::UpdateOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A user's presence as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Normalized username.
    pub username: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Whether the user is in the office.
    pub is_in_office: bool,
    /// Current room.
    pub room: String,
    /// Room transitions, oldest first.
    pub room_history: Vec<String>,
    /// Last day the user checked in.
    pub last_present_date: Option<NaiveDate>,
}

impl From<UserPresenceRecord> for UserResponse {
    fn from(record: UserPresenceRecord) -> Self {
        Self {
            username: record.username,
            full_name: record.full_name,
            is_in_office: record.is_in_office,
            room: record.room,
            room_history: record.room_history,
            last_present_date: record.last_present_date,
        }
    }
}

/// Registered usernames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Usernames, sorted.
    pub usernames: Vec<String>,
}

/// Result of a location report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationUpdateResponse {
    /// Normalized username.
    pub username: String,
    /// `applied` or `unchanged`.
    pub outcome: UpdateOutcome,
}

/// Favorite room lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRoomResponse {
    /// Normalized username.
    pub username: String,
    /// Most visited room; `null` with no qualifying history.
    pub favorite_room: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Active store backend.
    pub store: String,
}
