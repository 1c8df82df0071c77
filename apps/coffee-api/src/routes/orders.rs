//! `/orders` handlers.
//!
//! Rejections from the workflow become `400` with every conflict listed.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coffee_core::{Order, OrderDraft};

use crate::error::{ApiError, ApiResult};
use crate::services::OrderOutcome;
use crate::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let Json(draft) = payload?;
    match state.orders.create(draft).await? {
        OrderOutcome::Accepted(order) => Ok((StatusCode::CREATED, Json(order))),
        OrderOutcome::Rejected(conflicts) => Err(ApiError::rejected(&conflicts)),
    }
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    Ok(Json(state.orders.get(&id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<OrderDraft>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(draft) = payload?;
    match state.orders.update(&id, draft).await? {
        OrderOutcome::Accepted(_) => Ok(StatusCode::NO_CONTENT),
        OrderOutcome::Rejected(conflicts) => Err(ApiError::rejected(&conflicts)),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.orders.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn close(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.orders.close(&id).await?;
    Ok(StatusCode::OK)
}
