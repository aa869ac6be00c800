//! # locator-database
//!
//! The presence store contract and its backends:
//!
//! - **postgres**: `sqlx` repository with a single-statement conditional update
//! - **memory**: in-process store on [dashmap](https://crates.io/crates/dashmap)
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "memory")]
pub mod memory;
pub mod pool;
pub mod repositories;
pub mod store;

pub use pool::PresencePool;
pub use store::{ConditionalWrite, PresenceStore, StoreManager};
