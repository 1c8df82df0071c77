//! # Hot Coffee API
//!
//! REST server for a coffee shop: inventory, menu, orders and reports.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Hot Coffee Services                             │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │InventoryService│  │  MenuService   │  │  OrderService              ││
//! │  │                │  │                │  │                            ││
//! │  │ • list / get   │  │ • list / get   │  │ • create (reserve stock)   ││
//! │  │ • add / update │  │ • add / update │  │ • update (move reservation)││
//! │  │ • delete       │  │ • delete       │  │ • delete / close           ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐                                │
//! │  │ ReportService  │  │  admin/health  │                                │
//! │  │                │  │                │                                │
//! │  │ • total sales  │  │ • reset        │                                │
//! │  │ • popular items│  │ • health       │                                │
//! │  └────────────────┘  └────────────────┘                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Infrastructure                               │  │
//! │  │                                                                   │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐│  │
//! │  │  │  DataStore   │  │ WorkflowLock │  │  TraceLayer              ││  │
//! │  │  │              │  │              │  │                          ││  │
//! │  │  │ JSON files   │  │ tokio Mutex  │  │ request spans            ││  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────────┘│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (overridden by flags):
//! - `HOT_COFFEE_PORT` - HTTP port (default: 4000)
//! - `HOT_COFFEE_BIND_ADDR` - interface (default: 0.0.0.0)
//! - `HOT_COFFEE_DATA_DIR` - data directory (default: data)
//! - `HOT_COFFEE_LOG_LEVEL` - filter when `RUST_LOG` is unset (default: info)
//! - `HOT_COFFEE_LOG_FORMAT` - compact, pretty or json (default: compact)

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use coffee_store::DataStore;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod services;

// Re-exports
pub use cli::Cli;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

use crate::services::{InventoryService, MenuService, OrderService, ReportService, WorkflowLock};

/// Shared application state.
pub struct AppState {
    pub store: DataStore,
    pub workflow_lock: WorkflowLock,
    pub inventory: InventoryService,
    pub menu: MenuService,
    pub orders: OrderService,
    pub reports: ReportService,
}

impl AppState {
    /// Wires every service to one store and one workflow lock.
    pub fn new(store: DataStore) -> Self {
        let workflow_lock: WorkflowLock = Arc::new(Mutex::new(()));
        AppState {
            inventory: InventoryService::new(store.clone(), Arc::clone(&workflow_lock)),
            menu: MenuService::new(store.clone(), Arc::clone(&workflow_lock)),
            orders: OrderService::new(store.clone(), Arc::clone(&workflow_lock)),
            reports: ReportService::new(store.clone()),
            workflow_lock,
            store,
        }
    }
}

/// Builds the full router.
pub fn build_router(state: Arc<AppState>) -> Router {
    use crate::routes::{admin, health, inventory, menu, orders, reports};

    Router::new()
        .route("/inventory", get(inventory::list).post(inventory::create))
        .route(
            "/inventory/{id}",
            get(inventory::get).put(inventory::update).delete(inventory::delete),
        )
        .route("/menu", get(menu::list).post(menu::create))
        .route(
            "/menu/{id}",
            get(menu::get).put(menu::update).delete(menu::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        .route("/orders/{id}/close", post(orders::close))
        .route("/reports/total-sales", get(reports::total_sales))
        .route("/reports/popular-items", get(reports::popular_items))
        .route("/admin/reset", delete(admin::reset))
        .route("/health", get(health::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
