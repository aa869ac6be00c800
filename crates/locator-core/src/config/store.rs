//! Presence store backend configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which presence store backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// In-process store; state is lost on restart.
    #[default]
    Memory,
    /// PostgreSQL via sqlx.
    Postgres,
}

impl fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Top-level store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: StoreProvider,
    /// Run migrations when the postgres store is opened.
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::default(),
            auto_migrate: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
