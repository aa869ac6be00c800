//! Presence updates and history-derived queries.

pub mod favorite;
pub mod service;

pub use favorite::favorite_room;
pub use service::{LocationReport, PresenceService, UpdateOutcome};
