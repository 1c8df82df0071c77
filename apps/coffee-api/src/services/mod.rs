//! Service layer.
//!
//! Services sit between the HTTP handlers and the store. They apply the
//! domain rules from `coffee-core` and own the workflow lock.
//!
//! ```text
//!                     ┌──────────────────────┐
//!   handlers ───────► │  InventoryService ──┐│
//!                     │  MenuService ───────┤│──► WorkflowLock (one Mutex)
//!                     │  OrderService ──────┘│
//!                     │  ReportService       │   (read only, no lock)
//!                     └──────────┬───────────┘
//!                                ▼
//!                           DataStore
//! ```
//!
//! Every write that can change what an order evaluation sees holds the
//! lock for its whole read-evaluate-write sequence.

use std::sync::Arc;

use tokio::sync::Mutex;

pub mod inventory_service;
pub mod menu_service;
pub mod order_service;
pub mod report_service;

pub use inventory_service::InventoryService;
pub use menu_service::MenuService;
pub use order_service::{OrderOutcome, OrderService};
pub use report_service::ReportService;

/// Serializes order workflows and the stock and menu edits they depend on.
pub type WorkflowLock = Arc<Mutex<()>>;
