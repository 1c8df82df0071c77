//! `/menu` handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coffee_core::MenuItem;

use crate::error::ApiResult;
use crate::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu.list().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MenuItem>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MenuItem>)> {
    let Json(item) = payload?;
    let created = state.menu.add(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MenuItem>> {
    Ok(Json(state.menu.get(&id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<MenuItem>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(item) = payload?;
    state.menu.update(&id, item).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.menu.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
