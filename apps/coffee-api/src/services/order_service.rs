//! Order service: the order workflow engine.
//!
//! ## Create / Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lock.lock().await                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read orders, menu, inventory  (snapshot)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  coffee_core::workflow::plan_order()                                    │
//! │       │                                                                 │
//! │       ├── Reject(conflicts) ──► Rejected, nothing written               │
//! │       │                                                                 │
//! │       ▼ Accept(deltas)                                                  │
//! │  inventory.adjust_quantities(deltas)      ← commit point, one write     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  orders.add / orders.update                                             │
//! │       │                                                                 │
//! │       └── fails? ──► adjust_quantities(-deltas), hard error             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting an order does not return its stock.

use chrono::Utc;
use coffee_core::workflow::{invert_deltas, menu_index, plan_order};
use coffee_core::{Conflict, CoreError, Decision, InventorySnapshot, Order, OrderDraft, OrderPlan};
use coffee_store::DataStore;
use tracing::{error, info, warn};

use crate::error::ApiResult;
use crate::services::WorkflowLock;

/// Result of a create or update that did not fail hard.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Stock committed and order persisted.
    Accepted(Order),
    /// Nothing changed.
    Rejected(Vec<Conflict>),
}

#[derive(Debug, Clone)]
pub struct OrderService {
    store: DataStore,
    lock: WorkflowLock,
}

impl OrderService {
    pub fn new(store: DataStore, lock: WorkflowLock) -> Self {
        OrderService { store, lock }
    }

    pub async fn list(&self) -> ApiResult<Vec<Order>> {
        Ok(self.store.orders().list().await?)
    }

    pub async fn get(&self, order_id: &str) -> ApiResult<Order> {
        Ok(self.store.orders().get(order_id).await?)
    }

    /// Creates an order, reserving its ingredients.
    pub async fn create(&self, draft: OrderDraft) -> ApiResult<OrderOutcome> {
        let _guard = self.lock.lock().await;

        let order = draft.into_new_order(Utc::now());
        let existing = self.store.orders().list().await?;
        let id_taken = existing.iter().any(|o| o.order_id == order.order_id);

        let plan = self.plan(&order, id_taken, None).await?;
        self.commit(plan, order, None).await
    }

    /// Replaces an order, moving its reservation from the old items to the new.
    ///
    /// Blank fields in the draft keep the stored values; items always come
    /// from the draft.
    pub async fn update(&self, order_id: &str, draft: OrderDraft) -> ApiResult<OrderOutcome> {
        let _guard = self.lock.lock().await;

        let orders = self.store.orders().list().await?;
        let previous = orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;

        let updated = draft.merge_into(&previous);
        let id_taken = updated.order_id != previous.order_id
            && orders.iter().any(|o| o.order_id == updated.order_id);

        let plan = self.plan(&updated, id_taken, Some(&previous)).await?;
        for product_id in &plan.stale_products {
            warn!(
                order_id = %order_id,
                product_id = %product_id,
                "Previous line no longer on the menu, its stock is not returned"
            );
        }
        self.commit(plan, updated, Some(order_id)).await
    }

    pub async fn delete(&self, order_id: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().await;
        self.store.orders().delete(order_id).await?;
        Ok(())
    }

    /// Closes an order. Stock is untouched; it was reserved at creation.
    pub async fn close(&self, order_id: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().await;
        self.store.orders().close(order_id).await?;
        Ok(())
    }

    async fn plan(&self, order: &Order, id_taken: bool, previous: Option<&Order>) -> ApiResult<OrderPlan> {
        let menu = menu_index(self.store.menu().list().await?);
        let inventory = InventorySnapshot::new(self.store.inventory().list().await?);
        Ok(plan_order(order, id_taken, previous, &menu, &inventory))
    }

    /// Applies an accepted plan. Must be called with the lock held.
    async fn commit(&self, plan: OrderPlan, order: Order, replaces: Option<&str>) -> ApiResult<OrderOutcome> {
        let deltas = match plan.decision {
            Decision::Reject(conflicts) => {
                warn!(
                    order_id = %order.order_id,
                    conflicts = conflicts.len(),
                    "Order rejected"
                );
                return Ok(OrderOutcome::Rejected(conflicts));
            }
            Decision::Accept(deltas) => deltas,
        };

        let inventory = self.store.inventory();
        inventory.adjust_quantities(&deltas).await?;

        let persisted = match replaces {
            Some(id) => self.store.orders().update(id, order.clone()).await,
            None => self.store.orders().add(order.clone()).await,
        };

        if let Err(e) = persisted {
            error!(order_id = %order.order_id, error = %e, "Failed to persist order, returning stock");
            if let Err(undo) = inventory.adjust_quantities(&invert_deltas(&deltas)).await {
                error!(order_id = %order.order_id, error = %undo, "Failed to return stock");
            }
            return Err(e.into());
        }

        info!(
            order_id = %order.order_id,
            items = order.items.len(),
            ingredients = deltas.len(),
            "Order committed"
        );
        Ok(OrderOutcome::Accepted(order))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
