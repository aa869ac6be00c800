//! Presence report commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_service::{LocationReport, UpdateOutcome};

use crate::output::{self, OutputFormat};

/// Arguments for presence commands
#[derive(Debug, Args)]
pub struct PresenceArgs {
    /// Presence subcommand
    #[command(subcommand)]
    pub command: PresenceCommand,
}

/// Presence subcommands
#[derive(Debug, Subcommand)]
pub enum PresenceCommand {
    /// Report a user's location
    Set {
        /// Username
        username: String,
        /// Room the user is in
        #[arg(long, conflicts_with = "out")]
        room: Option<String>,
        /// The user left the office
        #[arg(long)]
        out: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct UpdateRow {
    username: String,
    outcome: String,
}

/// Execute presence commands
pub async fn execute(
    args: &PresenceArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::build_state(config).await?;

    match &args.command {
        PresenceCommand::Set {
            username,
            room,
            out,
        } => {
            let outcome = state
                .presence_service
                .update_location(LocationReport {
                    username: username.clone(),
                    is_in_office: !out,
                    room: room.clone(),
                })
                .await?;

            let outcome = match outcome {
                UpdateOutcome::Applied => "applied",
                UpdateOutcome::Unchanged => "unchanged",
            };
            output::print_item(
                &UpdateRow {
                    username: username.clone(),
                    outcome: outcome.to_string(),
                },
                format,
            );
        }
    }

    Ok(())
}
