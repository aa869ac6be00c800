//! Favorite room lookup.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_entity::presence::normalize_key;

use crate::output::{self, OutputFormat};

/// Arguments for the favorite command
#[derive(Debug, Args)]
pub struct FavoriteArgs {
    /// Username
    pub username: String,
}

#[derive(Debug, Serialize, Tabled)]
struct FavoriteRow {
    username: String,
    favorite_room: String,
}

/// Execute the favorite command
pub async fn execute(
    args: &FavoriteArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::build_state(config).await?;
    let favorite = state.presence_service.favorite_room(&args.username).await?;

    output::print_item(
        &FavoriteRow {
            username: normalize_key(&args.username),
            favorite_room: favorite.unwrap_or_else(|| "-".to_string()),
        },
        format,
    );
    Ok(())
}
