//! Error types for the Hot Coffee API.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError ─┐                                                           │
//! │             ├─ kind() ─► ApiError variant ─► status + JSON body         │
//! │  StoreError ┘                                                           │
//! │                                                                         │
//! │  BadRequest   400   { "error": "..." }                                 │
//! │  Rejected     400   { "error": "a\nb", "conflicts": ["a", "b"] }        │
//! │  NotFound     404   { "error": "..." }                                 │
//! │  Conflict     409   { "error": "..." }                                 │
//! │  Internal     500   { "error": "..." }                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coffee_core::{Conflict, CoreError, ErrorKind};
use coffee_store::StoreError;
use serde_json::json;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Order rejected for client-correctable reasons.
    #[error("{}", .0.join("\n"))]
    Rejected(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

/// Result type for service and handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn rejected(conflicts: &[Conflict]) -> Self {
        ApiError::Rejected(conflicts.iter().map(ToString::to_string).collect())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => ApiError::BadRequest(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Conflict => ApiError::Conflict(message),
            // Report failures; nothing here comes from the filesystem.
            ErrorKind::Infrastructure => {
                tracing::error!(error = %message, "Business rule failed on server side");
                ApiError::Internal(message)
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::BadRequest(err.to_string()),
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::Conflict => ApiError::Conflict(err.to_string()),
            ErrorKind::Infrastructure => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Storage operation failed");
                ApiError::Internal("Storage operation failed".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Rejected(conflicts) => json!({
                "error": self.to_string(),
                "conflicts": conflicts,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
