//! Route handlers organized by domain.

pub mod health;
pub mod presence;
pub mod user;
pub mod voice;
