//! Voice assistant handler.

use axum::Json;
use axum::extract::State;

use locator_entity::voice::{VoiceRequest, VoiceResponse};

use crate::state::AppState;

/// POST /api/voice
///
/// Always answers 200; store faults are spoken, not surfaced as errors.
pub async fn handle_turn(
    State(state): State<AppState>,
    Json(request): Json<VoiceRequest>,
) -> Json<VoiceResponse> {
    Json(state.dispatcher.handle(request).await)
}
