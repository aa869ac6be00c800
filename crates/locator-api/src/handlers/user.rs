//! Registration and lookup handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use locator_entity::presence::NewUser;

use crate::dto::request::RegisterUserRequest;
use crate::dto::response::{ApiResponse, UserListResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()?;

    let record = state
        .presence_service
        .register(NewUser {
            username: req.username,
            full_name: req.full_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record.into()))))
}

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserListResponse>>, ApiError> {
    let usernames = state.presence_service.list_usernames().await?;
    Ok(Json(ApiResponse::ok(UserListResponse { usernames })))
}

/// GET /api/users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let record = state.presence_service.get(&username).await?;
    Ok(Json(ApiResponse::ok(record.into())))
}
