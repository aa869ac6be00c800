//! Presence update and favorite-room handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use locator_entity::presence::normalize_key;
use locator_service::LocationReport;

use crate::dto::request::LocationUpdateRequest;
use crate::dto::response::{ApiResponse, FavoriteRoomResponse, LocationUpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /api/users/{username}/location
pub async fn update_location(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<LocationUpdateRequest>,
) -> Result<Json<ApiResponse<LocationUpdateResponse>>, ApiError> {
    req.validate()?;

    let outcome = state
        .presence_service
        .update_location(LocationReport {
            username: username.clone(),
            is_in_office: req.is_in_office,
            room: req.room,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LocationUpdateResponse {
        username: normalize_key(&username),
        outcome,
    })))
}

/// GET /api/users/{username}/favorite-room
pub async fn favorite_room(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<FavoriteRoomResponse>>, ApiError> {
    let favorite_room = state.presence_service.favorite_room(&username).await?;
    Ok(Json(ApiResponse::ok(FavoriteRoomResponse {
        username: normalize_key(&username),
        favorite_room,
    })))
}
