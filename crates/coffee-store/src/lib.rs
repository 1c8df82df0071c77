//! # coffee-store: JSON File Storage for Hot Coffee
//!
//! This crate provides persistence for the Hot Coffee service. Each
//! resource lives in its own JSON array file under one data directory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hot Coffee Data Flow                             │
//! │                                                                         │
//! │  OrderService::create_order (coffee-api)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   coffee-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   DataStore   │    │  Repositories │    │  Collection  │  │   │
//! │  │   │   (store.rs)  │    │               │    │              │  │   │
//! │  │   │               │    │ InventoryRepo │    │ Mutex + file │  │   │
//! │  │   │ data dir      │───►│ MenuRepo      │───►│ atomic write │  │   │
//! │  │   │ reset/health  │    │ OrderRepo     │    │ JSON array   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/inventory.json   data/menu_items.json   data/orders.json         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory handle and configuration
//! - [`collection`] - Locked, atomically rewritten JSON array files
//! - [`error`] - Store error types
//! - [`repository`] - Inventory, menu and order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coffee_store::{DataStore, StoreConfig};
//!
//! let store = DataStore::open(StoreConfig::new("./data")).await?;
//! let menu = store.menu().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::JsonCollection;
pub use error::{StoreError, StoreResult};
pub use store::{DataStore, StoreConfig};

// Repository re-exports for convenience
pub use repository::{InventoryRepository, MenuRepository, OrderRepository};
