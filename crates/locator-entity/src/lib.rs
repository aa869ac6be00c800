//! # locator-entity
//!
//! Domain entity models for the office locator. The presence record is a
//! database row (`sqlx::FromRow`); the voice types describe the envelope
//! exchanged with the voice assistant platform.

pub mod presence;
pub mod voice;
