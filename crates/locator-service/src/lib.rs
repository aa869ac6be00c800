//! # locator-service
//!
//! Business logic for the office locator. Services orchestrate the
//! presence store, the injectable clock and the phrase source to implement
//! the update path and the voice query path.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod dialog;
pub mod identity;
pub mod presence;

pub use dialog::{IntentDispatcher, Phrase, PhraseBook};
pub use identity::{FuzzyMatch, FuzzyResolver};
pub use presence::{LocationReport, PresenceService, UpdateOutcome, favorite_room};
