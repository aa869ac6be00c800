//! The presence store contract and the manager that dispatches to the
//! configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use locator_core::config::{AppConfig, StoreProvider};
use locator_core::result::AppResult;
use locator_entity::presence::{PresenceChange, UserPresenceRecord};

use crate::pool::PresencePool;
use crate::repositories::PgPresenceRepository;

/// Result of a guarded update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalWrite {
    /// The stored room differed and the change was written.
    Applied,
    /// The stored room already equals the target; nothing was written.
    PredicateFailed,
}

/// Keyed presence storage.
///
/// Usernames passed in are already normalized. Implementations must apply
/// [`PresenceStore::update_if_room_differs`] atomically: the room check,
/// the flag/room write and the history append either all happen or none do.
#[async_trait]
pub trait PresenceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a record by username.
    async fn get(&self, username: &str) -> AppResult<Option<UserPresenceRecord>>;

    /// Insert a new record. Fails with `AlreadyExists` if the key is taken.
    async fn put_new(&self, record: &UserPresenceRecord) -> AppResult<()>;

    /// Apply `change` only if the stored room differs from `change.room`.
    ///
    /// Fails with `NotFound` if no record exists for `username`.
    async fn update_if_room_differs(
        &self,
        username: &str,
        change: &PresenceChange,
    ) -> AppResult<ConditionalWrite>;

    /// Every registered username. Order is backend-defined.
    async fn scan_usernames(&self) -> AppResult<Vec<String>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Store manager that wraps the configured backend.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn PresenceStore>,
}

impl StoreManager {
    /// Open the backend named in configuration.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let inner: Arc<dyn PresenceStore> = match config.store.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL presence store");
                let pool = PresencePool::open(&config.database).await?;
                if config.store.auto_migrate {
                    pool.migrate().await?;
                }
                Arc::new(PgPresenceRepository::new(pool))
            }
            #[cfg(feature = "memory")]
            StoreProvider::Memory => {
                info!("Initializing in-memory presence store");
                Arc::new(crate::memory::MemoryPresenceStore::new())
            }
            #[cfg(not(feature = "memory"))]
            StoreProvider::Memory => {
                return Err(locator_core::error::AppError::configuration(
                    "The memory store is not compiled in; enable the 'memory' feature",
                ));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl PresenceStore for StoreManager {
    async fn get(&self, username: &str) -> AppResult<Option<UserPresenceRecord>> {
        self.inner.get(username).await
    }

    async fn put_new(&self, record: &UserPresenceRecord) -> AppResult<()> {
        self.inner.put_new(record).await
    }

    async fn update_if_room_differs(
        &self,
        username: &str,
        change: &PresenceChange,
    ) -> AppResult<ConditionalWrite> {
        self.inner.update_if_room_differs(username, change).await
    }

    async fn scan_usernames(&self) -> AppResult<Vec<String>> {
        self.inner.scan_usernames().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
