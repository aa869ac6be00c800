//! Room labels and key normalization.

/// Room sentinel for a user who is not in the office.
pub const OUT: &str = "out";

/// Room sentinel for a user who is in, at an untracked location.
pub const SOMEWHERE: &str = "somewhere";

/// Trim and lowercase a username or room label.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
