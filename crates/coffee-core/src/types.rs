//! # Domain Types
//!
//! Core domain types used throughout Hot Coffee.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InventoryItem  │   │    MenuItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ingredient_id  │◄──│  ingredients[]  │◄──│  items[]        │       │
//! │  │  name           │   │  product_id     │   │  order_id       │       │
//! │  │  quantity (f64) │   │  price (f64)    │   │  status         │       │
//! │  │  unit           │   │  name           │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ MenuIngredient  │   │   OrderItem     │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ingredient_id  │   │  product_id     │   │  Open           │       │
//! │  │  quantity/unit  │   │  quantity (i64) │   │  Closed         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! Field names are the JSON names used on the HTTP API and in the data
//! files (`ingredient_id`, `product_id`, `order_id`, ...). Changing a field
//! name here changes the persisted format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Inventory
// =============================================================================

/// A quantity-tracked raw stock unit (flour, milk, espresso beans...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique business identifier.
    pub ingredient_id: String,

    /// Unique display name.
    pub name: String,

    /// Units currently in stock. Never negative after a committed workflow.
    pub quantity: f64,

    /// Unit label appended to quantities in messages ("g", "ml", "shots").
    pub unit: String,
}

// =============================================================================
// Menu
// =============================================================================

/// One line of a recipe: how much of an ingredient a single unit consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuIngredient {
    pub ingredient_id: String,
    pub quantity: f64,
}

/// A sellable product with a fixed recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique business identifier.
    pub product_id: String,

    /// Unique display name.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit price. Must be positive.
    pub price: f64,

    /// Per-unit ingredient consumption.
    pub ingredients: Vec<MenuIngredient>,
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle state of an order.
///
/// ```text
/// open ──close()──► closed   (terminal, no reopening)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Stock is reserved; the order is not billed yet.
    #[default]
    Open,
    /// Billed. Only closed orders count towards sales reports.
    Closed,
}

impl OrderStatus {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A `(product_id, quantity)` pair referencing a menu item.
///
/// The quantity is signed so that zero and negative values survive
/// deserialization and can be reported as conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
}

/// A persisted customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating an order.
///
/// Every field may be omitted. Missing strings read as empty so the
/// workflow can report them as conflicts instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub order_id: String,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderDraft {
    /// Builds a new order from this draft, defaulting status to open and
    /// the creation time to `now`.
    pub fn into_new_order(self, now: DateTime<Utc>) -> Order {
        Order {
            order_id: self.order_id,
            customer_name: self.customer_name,
            items: self.items,
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or(now),
        }
    }

    /// Merges this draft over an existing order.
    ///
    /// Empty or absent fields keep the existing order's value. Items are
    /// always taken from the draft. A closed order stays closed.
    pub fn merge_into(self, existing: &Order) -> Order {
        let status = if existing.status.is_closed() {
            OrderStatus::Closed
        } else {
            self.status.unwrap_or(existing.status)
        };

        Order {
            order_id: non_empty_or(self.order_id, &existing.order_id),
            customer_name: non_empty_or(self.customer_name, &existing.customer_name),
            items: self.items,
            status,
            created_at: self.created_at.unwrap_or(existing.created_at),
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Revenue derived from closed orders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalSales {
    pub total_sales: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
