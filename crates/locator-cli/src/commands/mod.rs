//! CLI command definitions and dispatch.

pub mod ask;
pub mod favorite;
pub mod migrate;
pub mod presence;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use locator_api::AppState;
use locator_core::config::AppConfig;
use locator_core::error::AppError;

use crate::output::OutputFormat;

/// Office locator: who is in, and where
#[derive(Debug, Parser)]
#[command(name = "locator", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User registration and lookup
    User(user::UserArgs),
    /// Presence reports
    Presence(presence::PresenceArgs),
    /// Show a user's most visited room
    Favorite(favorite::FavoriteArgs),
    /// Ask the voice assistant a question
    Ask(ask::AskArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Presence(args) => presence::execute(args, config, self.format).await,
            Commands::Favorite(args) => favorite::execute(args, config, self.format).await,
            Commands::Ask(args) => ask::execute(args, config).await,
        }
    }
}

/// Helper: open the configured store and wire the services
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    AppState::from_config(config).await
}
