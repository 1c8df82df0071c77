//! # Repository Module
//!
//! Typed access to the three collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Service (coffee-api)                                                  │
//! │       │                                                                 │
//! │       │  store.inventory().adjust_quantities(&deltas)                  │
//! │       ▼                                                                 │
//! │  InventoryRepository / MenuRepository / OrderRepository                │
//! │  ├── list()                                                            │
//! │  ├── get(id)                                                           │
//! │  ├── add(record)                                                       │
//! │  ├── update(id, record)                                                │
//! │  └── delete(id)                                                        │
//! │       │                                                                 │
//! │       │  read-modify-write under the collection lock                   │
//! │       ▼                                                                 │
//! │  JsonCollection<T>  →  inventory.json / menu_items.json / orders.json  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are cheap handles. Every handle for the same resource
//! shares one `Arc<JsonCollection<_>>` and therefore one lock.
//!
//! ## Available Repositories
//!
//! - [`InventoryRepository`] - Ingredient CRUD and stock adjustment
//! - [`MenuRepository`] - Menu item CRUD
//! - [`OrderRepository`] - Order CRUD and close

pub mod inventory;
pub mod menu;
pub mod order;

pub use inventory::InventoryRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;

/// Resolves the id a record should carry after an update.
///
/// A blank id in the body keeps the id from the path.
pub(crate) fn effective_id(path_id: &str, body_id: &str) -> String {
    if body_id.trim().is_empty() {
        path_id.to_string()
    } else {
        body_id.to_string()
    }
}
