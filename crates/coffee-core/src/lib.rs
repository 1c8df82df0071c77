//! # coffee-core: Pure Business Logic for Hot Coffee
//!
//! This crate holds every rule of the coffee shop as pure functions.
//! It reads no files, opens no sockets and never looks at the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hot Coffee Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 coffee-api (axum handlers)                      │   │
//! │  │    /inventory  /menu  /orders  /reports  /admin  /health        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ services hold the workflow lock        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coffee-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ workflow  │  │  reports  │  │ validation│  │   │
//! │  │   │ MenuItem  │  │ Conflict  │  │ TotalSales│  │   rules   │  │   │
//! │  │   │  Order    │  │ plan_order│  │  top N    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO NETWORK • NO CLOCK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 coffee-store (JSON files)                       │   │
//! │  │       inventory.json   menu_items.json   orders.json            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, MenuItem, Order, ...)
//! - [`error`] - Domain error types and [`ErrorKind`]
//! - [`validation`] - Field rules for inventory and menu records
//! - [`workflow`] - Order evaluation: conflicts, requirements, stock deltas
//! - [`reports`] - Total sales and popular items
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use coffee_core::workflow::{menu_index, plan_order, Decision, InventorySnapshot};
//! use coffee_core::{InventoryItem, MenuIngredient, MenuItem, Order, OrderItem, OrderStatus};
//!
//! let menu = menu_index([MenuItem {
//!     product_id: "espresso".into(),
//!     name: "Espresso".into(),
//!     description: String::new(),
//!     price: 2.5,
//!     ingredients: vec![MenuIngredient { ingredient_id: "beans".into(), quantity: 18.0 }],
//! }]);
//! let inventory = InventorySnapshot::new([InventoryItem {
//!     ingredient_id: "beans".into(),
//!     name: "Espresso beans".into(),
//!     quantity: 1000.0,
//!     unit: "g".into(),
//! }]);
//! let order = Order {
//!     order_id: "o-1".into(),
//!     customer_name: "Sam".into(),
//!     items: vec![OrderItem { product_id: "espresso".into(), quantity: 2 }],
//!     status: OrderStatus::Open,
//!     created_at: Utc::now(),
//! };
//!
//! let plan = plan_order(&order, false, None, &menu, &inventory);
//! let Decision::Accept(deltas) = plan.decision else { unreachable!() };
//! assert_eq!(deltas["beans"], -36.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reports;
pub mod types;
pub mod validation;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use types::*;
pub use workflow::{Conflict, Decision, InventorySnapshot, MenuIndex, OrderPlan, StockDeltas};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries returned by the popular-items report.
pub const POPULAR_ITEMS_COUNT: usize = 3;
