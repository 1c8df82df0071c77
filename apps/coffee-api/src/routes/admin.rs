//! `/admin` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::error::ApiResult;
use crate::AppState;

/// Empties inventory, menu and orders.
pub async fn reset(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    let _guard = state.workflow_lock.lock().await;
    warn!("Resetting all collections");
    state.store.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
