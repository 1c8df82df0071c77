//! `/inventory` handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coffee_core::InventoryItem;

use crate::error::ApiResult;
use crate::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.inventory.list().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InventoryItem>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InventoryItem>)> {
    let Json(item) = payload?;
    let created = state.inventory.add(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<InventoryItem>> {
    Ok(Json(state.inventory.get(&id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<InventoryItem>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(item) = payload?;
    state.inventory.update(&id, item).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.inventory.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
