//! `/health` handler.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::AppState;

const SERVICE_NAME: &str = "hot-coffee";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// `200 healthy` while the data directory is readable, `503` otherwise.
pub async fn check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    if state.store.health_check().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                service: SERVICE_NAME,
            }),
        )
    } else {
        tracing::error!(path = %state.store.data_dir().display(), "Data directory unreadable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                service: SERVICE_NAME,
            }),
        )
    }
}
