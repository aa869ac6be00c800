//! In-process presence store.

pub mod store;

pub use store::MemoryPresenceStore;
