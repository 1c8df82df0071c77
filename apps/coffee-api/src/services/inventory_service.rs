//! Inventory service.
//!
//! Validates ingredient records and writes them under the workflow lock.

use coffee_core::validation::validate_inventory_item;
use coffee_core::{CoreError, InventoryItem};
use coffee_store::DataStore;

use crate::error::ApiResult;
use crate::services::WorkflowLock;

#[derive(Debug, Clone)]
pub struct InventoryService {
    store: DataStore,
    lock: WorkflowLock,
}

impl InventoryService {
    pub fn new(store: DataStore, lock: WorkflowLock) -> Self {
        InventoryService { store, lock }
    }

    pub async fn list(&self) -> ApiResult<Vec<InventoryItem>> {
        Ok(self.store.inventory().list().await?)
    }

    pub async fn get(&self, ingredient_id: &str) -> ApiResult<InventoryItem> {
        Ok(self.store.inventory().get(ingredient_id).await?)
    }

    pub async fn add(&self, item: InventoryItem) -> ApiResult<InventoryItem> {
        validate_inventory_item(&item, true).map_err(CoreError::from)?;

        let _guard = self.lock.lock().await;
        self.store.inventory().add(item.clone()).await?;
        Ok(item)
    }

    /// Replaces an ingredient. A blank id in the body keeps `ingredient_id`.
    pub async fn update(&self, ingredient_id: &str, item: InventoryItem) -> ApiResult<()> {
        validate_inventory_item(&item, false).map_err(CoreError::from)?;

        let _guard = self.lock.lock().await;
        self.store.inventory().update(ingredient_id, item).await?;
        Ok(())
    }

    pub async fn delete(&self, ingredient_id: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().await;
        self.store.inventory().delete(ingredient_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use coffee_store::StoreConfig;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    async fn service(dir: &TempDir) -> InventoryService {
        let store = DataStore::open(StoreConfig::new(dir.path())).await.unwrap();
        InventoryService::new(store, Arc::new(Mutex::new(())))
    }

    fn milk(quantity: f64) -> InventoryItem {
        InventoryItem {
            ingredient_id: "milk".into(),
            name: "Milk".into(),
            quantity,
            unit: "ml".into(),
        }
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected_on_add_and_update() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir).await;

        assert!(matches!(
            service.add(milk(-1.0)).await,
            Err(ApiError::BadRequest(_))
        ));

        service.add(milk(10.0)).await.unwrap();
        assert!(matches!(
            service.update("milk", milk(-5.0)).await,
            Err(ApiError::BadRequest(_))
        ));
        assert_eq!(service.get("milk").await.unwrap().quantity, 10.0);
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir).await;
        service.add(milk(10.0)).await.unwrap();

        assert!(matches!(
            service.add(milk(10.0)).await,
            Err(ApiError::Conflict(_))
        ));
    }
}
