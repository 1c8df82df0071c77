//! `/reports` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use coffee_core::TotalSales;

use crate::error::ApiResult;
use crate::AppState;

pub async fn total_sales(State(state): State<Arc<AppState>>) -> ApiResult<Json<TotalSales>> {
    Ok(Json(state.reports.total_sales().await?))
}

pub async fn popular_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.reports.popular_items().await?))
}
