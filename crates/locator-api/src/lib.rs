//! # locator-api
//!
//! HTTP API layer for the office locator built on Axum.
//!
//! Provides the presence and voice endpoints, middleware (logging, CORS,
//! timeouts), DTOs and the mapping from [`AppError`] to HTTP responses.
//!
//! [`AppError`]: locator_core::error::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
