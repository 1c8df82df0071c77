//! # Order Repository
//!
//! File operations for orders.
//!
//! Unlike inventory and menu, `add` does not check for duplicate ids.
//! The order workflow decides whether an id is taken (and reports it as a
//! conflict) before it ever reaches the store.

use std::sync::Arc;

use coffee_core::{Order, OrderStatus};
use tracing::{debug, info};

use crate::collection::JsonCollection;
use crate::error::{StoreError, StoreResult};

const ENTITY: &str = "Order";

/// Repository for orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    collection: Arc<JsonCollection<Order>>,
}

impl OrderRepository {
    pub fn new(collection: Arc<JsonCollection<Order>>) -> Self {
        OrderRepository { collection }
    }

    pub async fn list(&self) -> StoreResult<Vec<Order>> {
        let orders = self.collection.read_all().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    pub async fn get(&self, order_id: &str) -> StoreResult<Order> {
        self.collection
            .read_all()
            .await?
            .into_iter()
            .find(|o| o.order_id == order_id)
            .ok_or_else(|| StoreError::not_found(ENTITY, order_id))
    }

    pub async fn add(&self, order: Order) -> StoreResult<()> {
        let id = order.order_id.clone();
        self.collection
            .modify(|orders| {
                orders.push(order);
                Ok(())
            })
            .await?;

        info!(order_id = %id, "Order stored");
        Ok(())
    }

    /// Replaces the order stored under `order_id` (the new order may carry a new id).
    pub async fn update(&self, order_id: &str, order: Order) -> StoreResult<()> {
        self.collection
            .modify(|orders| {
                let slot = orders
                    .iter_mut()
                    .find(|o| o.order_id == order_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, order_id))?;
                *slot = order;
                Ok(())
            })
            .await?;

        info!(order_id = %order_id, "Order replaced");
        Ok(())
    }

    pub async fn delete(&self, order_id: &str) -> StoreResult<()> {
        self.collection
            .modify(|orders| {
                let index = orders
                    .iter()
                    .position(|o| o.order_id == order_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, order_id))?;
                orders.remove(index);
                Ok(())
            })
            .await?;

        info!(order_id = %order_id, "Order deleted");
        Ok(())
    }

    /// Marks an order closed. Closing a closed order succeeds without change.
    pub async fn close(&self, order_id: &str) -> StoreResult<()> {
        let newly_closed = self
            .collection
            .modify(|orders| {
                let order = orders
                    .iter_mut()
                    .find(|o| o.order_id == order_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, order_id))?;
                let was_open = !order.status.is_closed();
                order.status = OrderStatus::Closed;
                Ok(was_open)
            })
            .await?;

        if newly_closed {
            info!(order_id = %order_id, "Order closed");
        } else {
            debug!(order_id = %order_id, "Order already closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use coffee_core::OrderItem;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> OrderRepository {
        OrderRepository::new(Arc::new(JsonCollection::new(dir.path().join("orders.json"))))
    }

    fn order(id: &str) -> Order {
        Order {
            order_id: id.into(),
            customer_name: "Frank".into(),
            items: vec![OrderItem {
                product_id: "latte".into(),
                quantity: 1,
            }],
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(order("o-1")).await.unwrap();

        repo.close("o-1").await.unwrap();
        repo.close("o-1").await.unwrap();
        assert_eq!(repo.get("o-1").await.unwrap().status, OrderStatus::Closed);

        assert!(matches!(
            repo.close("o-2").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_can_rename() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(order("o-1")).await.unwrap();

        repo.update("o-1", order("o-9")).await.unwrap();
        assert!(repo.get("o-1").await.is_err());
        assert!(repo.get("o-9").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_unknown_order() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(order("o-1")).await.unwrap();

        repo.delete("o-1").await.unwrap();
        assert!(matches!(
            repo.delete("o-1").await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
