//! User registration and lookup commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_entity::presence::{NewUser, UserPresenceRecord};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Register {
        /// Username
        username: String,
        /// Display name used in spoken answers
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Show a user's presence
    Show {
        /// Username
        username: String,
    },
    /// List registered users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct UserRow {
    /// Username
    pub username: String,
    /// Display name
    pub full_name: String,
    /// In the office
    pub in_office: bool,
    /// Current room
    pub room: String,
    /// Rooms visited
    pub visits: usize,
    /// Last check-in day
    pub last_present: String,
}

impl From<UserPresenceRecord> for UserRow {
    fn from(r: UserPresenceRecord) -> Self {
        Self {
            username: r.username,
            full_name: r.full_name.unwrap_or_default(),
            in_office: r.is_in_office,
            room: r.room,
            visits: r.room_history.len(),
            last_present: r
                .last_present_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::build_state(config).await?;
    let presence = &state.presence_service;

    match &args.command {
        UserCommand::Register {
            username,
            full_name,
        } => {
            let record = presence
                .register(NewUser {
                    username: username.clone(),
                    full_name: full_name.clone(),
                })
                .await?;
            output::print_success(&format!("User '{}' registered", record.username));
        }
        UserCommand::Show { username } => {
            let record = presence.get(username).await?;
            output::print_item(&UserRow::from(record), format);
        }
        UserCommand::List => {
            let mut rows = Vec::new();
            for username in presence.list_usernames().await? {
                rows.push(UserRow::from(presence.get(&username).await?));
            }
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
