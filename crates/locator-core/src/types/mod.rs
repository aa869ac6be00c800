//! Core type definitions used across the locator workspace.

pub mod response;

pub use response::ApiErrorResponse;
