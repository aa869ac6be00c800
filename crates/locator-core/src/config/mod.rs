//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so an empty configuration
//! boots with the in-process store.

pub mod app;
pub mod database;
pub mod logging;
pub mod store;
pub mod voice;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{StoreConfig, StoreProvider};
pub use self::voice::{PhrasePools, VoiceConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Presence store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Database connection settings (used by the postgres store).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Voice dialog settings and phrase pools.
    #[serde(default)]
    pub voice: VoiceConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, an environment-specific overlay and
    /// environment variables of the form `LOCATOR__SECTION__KEY`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration starting from an explicit base file.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// Environment overrides; the prefix and each nesting level are joined by `__`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("LOCATOR")
        .separator("__")
        .try_parsing(true)
}
