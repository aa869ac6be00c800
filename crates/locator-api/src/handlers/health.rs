//! Health check handler.

use axum::Json;
use axum::extract::State;

use locator_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    if !state.store.health_check().await? {
        return Err(AppError::store_unavailable("Presence store health check failed").into());
    }

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.config.store.provider.to_string(),
    })))
}
