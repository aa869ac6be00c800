//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_core::traits::{Clock, IndexSource, SystemClock, ThreadRngSource};
use locator_database::store::{PresenceStore, StoreManager};
use locator_service::{FuzzyResolver, IntentDispatcher, PhraseBook, PresenceService};

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Presence store, used directly for health checks.
    pub store: Arc<dyn PresenceStore>,
    /// Registration and presence updates.
    pub presence_service: Arc<PresenceService>,
    /// Voice turn handling.
    pub dispatcher: Arc<IntentDispatcher>,
}

impl AppState {
    /// Wire services around an already-open store.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn PresenceStore>,
        clock: Arc<dyn Clock>,
        source: Arc<dyn IndexSource>,
    ) -> Result<Self, AppError> {
        config.voice.validate()?;

        let voice = Arc::new(config.voice.clone());
        let presence_service = Arc::new(PresenceService::new(
            Arc::clone(&store),
            Arc::clone(&clock),
        ));
        let dispatcher = Arc::new(IntentDispatcher::new(
            Arc::clone(&store),
            FuzzyResolver::new(config.voice.fuzzy_max_distance),
            PhraseBook::new(voice, source),
            clock,
        ));

        Ok(Self {
            config: Arc::new(config),
            store,
            presence_service,
            dispatcher,
        })
    }

    /// Open the configured store and wire production dependencies.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn PresenceStore> = Arc::new(StoreManager::new(&config).await?);
        Self::new(config, store, Arc::new(SystemClock), Arc::new(ThreadRngSource))
    }
}
