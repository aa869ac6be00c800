//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// Username; matched case-insensitively.
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,
    /// Display name used in spoken answers.
    #[validate(length(max = 200))]
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Location report body; the username comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationUpdateRequest {
    /// Whether the user is in the office.
    pub is_in_office: bool,
    /// Current room. Required when `is_in_office` is true.
    #[validate(length(max = 100))]
    #[serde(default)]
    pub room: Option<String>,
}
