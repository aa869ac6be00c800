//! Database migration commands.

use clap::{Args, Subcommand};

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_database::PresencePool;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations against `database.url`
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            let pool = PresencePool::open(&config.database).await?;
            println!("Running database migrations...");
            pool.migrate().await?;
            output::print_success("All migrations applied successfully.");
        }
    }
    Ok(())
}
