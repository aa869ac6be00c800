//! Presence domain entities.

pub mod model;
pub mod room;

pub use model::{NewUser, PresenceChange, UserPresenceRecord};
pub use room::{OUT, SOMEWHERE, normalize_key};
