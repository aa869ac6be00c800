//! Maps domain `AppError` to HTTP responses.
//!
//! Axum's `IntoResponse` cannot be implemented for a foreign type, so
//! handlers return [`ApiError`], which every `AppError` converts into via `?`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use locator_core::error::{AppError, ErrorKind};
use locator_core::types::ApiErrorResponse;

/// Handler error wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "body".to_string());
        Self(AppError::invalid_argument(&field))
    }
}

/// Status code for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Serialization => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal | ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        match err.kind {
            ErrorKind::StoreUnavailable => {
                tracing::warn!(error = %err.message, "Presence store unavailable");
            }
            ErrorKind::Internal | ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Internal server error");
            }
            _ => {}
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message.clone(),
            retryable: err.is_transient(),
        };

        (status, Json(body)).into_response()
    }
}
