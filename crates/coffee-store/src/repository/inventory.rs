//! # Inventory Repository
//!
//! File operations for ingredients.
//!
//! ## Key Operations
//! - CRUD with id and name uniqueness
//! - `adjust_quantities`: the order workflow's commit primitive
//!
//! ## Stock Adjustment
//! ```text
//! deltas { espresso_beans: -36, milk: -400 }
//!      │
//!      ▼
//! every id known? ── no ──► NotFound, nothing written
//!      │ yes
//!      ▼
//! quantity += delta for each, ONE file write
//! ```

use std::sync::Arc;

use coffee_core::{InventoryItem, StockDeltas};
use tracing::{debug, info};

use crate::collection::JsonCollection;
use crate::error::{StoreError, StoreResult};
use crate::repository::effective_id;

const ENTITY: &str = "Ingredient";

/// Repository for inventory items.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    collection: Arc<JsonCollection<InventoryItem>>,
}

impl InventoryRepository {
    pub fn new(collection: Arc<JsonCollection<InventoryItem>>) -> Self {
        InventoryRepository { collection }
    }

    /// Lists every ingredient in file order.
    pub async fn list(&self) -> StoreResult<Vec<InventoryItem>> {
        let items = self.collection.read_all().await?;
        debug!(count = items.len(), "Listed inventory");
        Ok(items)
    }

    /// Gets one ingredient by id.
    pub async fn get(&self, ingredient_id: &str) -> StoreResult<InventoryItem> {
        self.collection
            .read_all()
            .await?
            .into_iter()
            .find(|i| i.ingredient_id == ingredient_id)
            .ok_or_else(|| StoreError::not_found(ENTITY, ingredient_id))
    }

    /// Adds an ingredient.
    ///
    /// ## Errors
    /// - `Duplicate` if the id or the name is already used
    pub async fn add(&self, item: InventoryItem) -> StoreResult<()> {
        let id = item.ingredient_id.clone();
        self.collection
            .modify(|items| {
                if items.iter().any(|i| i.ingredient_id == item.ingredient_id) {
                    return Err(StoreError::duplicate("ingredient_id", &item.ingredient_id));
                }
                if items.iter().any(|i| i.name == item.name) {
                    return Err(StoreError::duplicate("name", &item.name));
                }
                items.push(item);
                Ok(())
            })
            .await?;

        info!(ingredient_id = %id, "Ingredient added");
        Ok(())
    }

    /// Replaces the ingredient stored under `ingredient_id`.
    ///
    /// A blank id in `item` keeps `ingredient_id`. The new id and name may
    /// not belong to any *other* ingredient.
    pub async fn update(&self, ingredient_id: &str, mut item: InventoryItem) -> StoreResult<()> {
        item.ingredient_id = effective_id(ingredient_id, &item.ingredient_id);

        self.collection
            .modify(|items| {
                let index = items
                    .iter()
                    .position(|i| i.ingredient_id == ingredient_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, ingredient_id))?;

                for (i, other) in items.iter().enumerate() {
                    if i == index {
                        continue;
                    }
                    if other.ingredient_id == item.ingredient_id {
                        return Err(StoreError::duplicate("ingredient_id", &item.ingredient_id));
                    }
                    if other.name == item.name {
                        return Err(StoreError::duplicate("name", &item.name));
                    }
                }

                items[index] = item;
                Ok(())
            })
            .await?;

        info!(ingredient_id = %ingredient_id, "Ingredient updated");
        Ok(())
    }

    /// Deletes an ingredient.
    ///
    /// Menu items and open orders referencing it are not checked.
    pub async fn delete(&self, ingredient_id: &str) -> StoreResult<()> {
        self.collection
            .modify(|items| {
                let index = items
                    .iter()
                    .position(|i| i.ingredient_id == ingredient_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, ingredient_id))?;
                items.remove(index);
                Ok(())
            })
            .await?;

        info!(ingredient_id = %ingredient_id, "Ingredient deleted");
        Ok(())
    }

    /// Applies signed stock deltas in a single write.
    ///
    /// ## Errors
    /// - `NotFound` naming the first unknown ingredient; nothing is written
    pub async fn adjust_quantities(&self, deltas: &StockDeltas) -> StoreResult<()> {
        if deltas.is_empty() {
            return Ok(());
        }

        self.collection
            .modify(|items| {
                if let Some(unknown) = deltas
                    .keys()
                    .find(|id| !items.iter().any(|i| &i.ingredient_id == *id))
                {
                    return Err(StoreError::not_found(ENTITY, unknown.as_str()));
                }

                for item in items.iter_mut() {
                    if let Some(delta) = deltas.get(&item.ingredient_id) {
                        item.quantity += delta;
                    }
                }
                Ok(())
            })
            .await?;

        info!(ingredients = deltas.len(), "Stock adjusted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> InventoryRepository {
        InventoryRepository::new(Arc::new(JsonCollection::new(
            dir.path().join("inventory.json"),
        )))
    }

    fn item(id: &str, name: &str, quantity: f64) -> InventoryItem {
        InventoryItem {
            ingredient_id: id.into(),
            name: name.into(),
            quantity,
            unit: "g".into(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.add(item("sugar", "Sugar", 500.0)).await.unwrap();

        assert_eq!(repo.get("sugar").await.unwrap().quantity, 500.0);
        assert!(matches!(
            repo.get("salt").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_id_and_name() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(item("sugar", "Sugar", 500.0)).await.unwrap();

        let err = repo.add(item("sugar", "Cane Sugar", 1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { ref field, .. } if field == "ingredient_id"));

        let err = repo.add(item("sugar2", "Sugar", 1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { ref field, .. } if field == "name"));

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_path_id_and_checks_others() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(item("sugar", "Sugar", 500.0)).await.unwrap();
        repo.add(item("milk", "Milk", 1000.0)).await.unwrap();

        // Same record may keep its own name.
        repo.update("sugar", item("", "Sugar", 250.0)).await.unwrap();
        assert_eq!(repo.get("sugar").await.unwrap().quantity, 250.0);

        let err = repo.update("sugar", item("milk", "Sugar", 1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        let err = repo.update("nope", item("nope", "Nope", 1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(item("sugar", "Sugar", 500.0)).await.unwrap();

        repo.delete("sugar").await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.delete("sugar").await.is_err());
    }

    #[tokio::test]
    async fn test_adjust_quantities_is_all_or_nothing() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(item("sugar", "Sugar", 500.0)).await.unwrap();
        repo.add(item("milk", "Milk", 1000.0)).await.unwrap();

        let mut deltas = StockDeltas::new();
        deltas.insert("sugar".into(), -100.0);
        deltas.insert("milk".into(), 50.0);
        repo.adjust_quantities(&deltas).await.unwrap();
        assert_eq!(repo.get("sugar").await.unwrap().quantity, 400.0);
        assert_eq!(repo.get("milk").await.unwrap().quantity, 1050.0);

        deltas.insert("cocoa".into(), -1.0);
        let err = repo.adjust_quantities(&deltas).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "cocoa"));
        assert_eq!(repo.get("sugar").await.unwrap().quantity, 400.0);
    }
}
