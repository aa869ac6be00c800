//! Convenience result type alias for the office locator.

use crate::error::AppError;

/// A specialized `Result` type for locator operations.
pub type AppResult<T> = Result<T, AppError>;
