//! Route definitions for the office locator HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(voice_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, presence reports and lookups
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register).get(handlers::user::list))
        .route("/users/{username}", get(handlers::user::get_user))
        .route(
            "/users/{username}/location",
            put(handlers::presence::update_location),
        )
        .route(
            "/users/{username}/favorite-room",
            get(handlers::presence::favorite_room),
        )
}

/// Voice assistant turns
fn voice_routes() -> Router<AppState> {
    Router::new().route("/voice", post(handlers::voice::handle_turn))
}

/// Liveness and store health
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
