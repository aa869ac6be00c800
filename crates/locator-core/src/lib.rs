//! # locator-core
//!
//! Core crate for the office locator. Contains configuration schemas,
//! the injectable clock and randomness traits, API response types, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other locator crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
