//! # Menu Repository
//!
//! File operations for menu items. Uniqueness rules match the inventory:
//! `product_id` and `name` are each unique across the menu.
//!
//! Ingredient references are checked by the menu service, not here.

use std::sync::Arc;

use coffee_core::MenuItem;
use tracing::{debug, info};

use crate::collection::JsonCollection;
use crate::error::{StoreError, StoreResult};
use crate::repository::effective_id;

const ENTITY: &str = "Menu item";

/// Repository for menu items.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    collection: Arc<JsonCollection<MenuItem>>,
}

impl MenuRepository {
    pub fn new(collection: Arc<JsonCollection<MenuItem>>) -> Self {
        MenuRepository { collection }
    }

    pub async fn list(&self) -> StoreResult<Vec<MenuItem>> {
        let items = self.collection.read_all().await?;
        debug!(count = items.len(), "Listed menu");
        Ok(items)
    }

    pub async fn get(&self, product_id: &str) -> StoreResult<MenuItem> {
        self.collection
            .read_all()
            .await?
            .into_iter()
            .find(|m| m.product_id == product_id)
            .ok_or_else(|| StoreError::not_found(ENTITY, product_id))
    }

    /// Adds a menu item.
    ///
    /// ## Errors
    /// - `Duplicate` if the product id or the name is already used
    pub async fn add(&self, item: MenuItem) -> StoreResult<()> {
        let id = item.product_id.clone();
        self.collection
            .modify(|items| {
                ensure_unique(items, None, &item)?;
                items.push(item);
                Ok(())
            })
            .await?;

        info!(product_id = %id, "Menu item added");
        Ok(())
    }

    /// Replaces the menu item stored under `product_id`.
    pub async fn update(&self, product_id: &str, mut item: MenuItem) -> StoreResult<()> {
        item.product_id = effective_id(product_id, &item.product_id);

        self.collection
            .modify(|items| {
                let index = items
                    .iter()
                    .position(|m| m.product_id == product_id)
                    .ok_or_else(|| StoreError::not_found(ENTITY, product_id))?;
                ensure_unique(items, Some(index), &item)?;
                items[index] = item;
                Ok(())
            })
            .await?;

        info!(product_id = %product_id, "Menu item updated");
        Ok(())
    }

    /// Deletes a menu item. Orders referencing it are left as they are.
    pub async fn delete(&self, product_id: &str) -> StoreResult<()> {
        self.collection
            .modify(|items| {
                let before = items.len();
                items.retain(|m| m.product_id != product_id);
                if items.len() == before {
                    return Err(StoreError::not_found(ENTITY, product_id));
                }
                Ok(())
            })
            .await?;

        info!(product_id = %product_id, "Menu item deleted");
        Ok(())
    }
}

fn ensure_unique(items: &[MenuItem], skip: Option<usize>, item: &MenuItem) -> StoreResult<()> {
    for (i, other) in items.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        if other.product_id == item.product_id {
            return Err(StoreError::duplicate("product_id", &item.product_id));
        }
        if other.name == item.name {
            return Err(StoreError::duplicate("name", &item.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::MenuIngredient;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> MenuRepository {
        MenuRepository::new(Arc::new(JsonCollection::new(
            dir.path().join("menu_items.json"),
        )))
    }

    fn drink(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            product_id: id.into(),
            name: name.into(),
            description: format!("{name} with steamed milk"),
            price,
            ingredients: vec![MenuIngredient {
                ingredient_id: "milk".into(),
                quantity: 150.0,
            }],
        }
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.add(drink("latte", "Latte", 3.5)).await.unwrap();
        repo.add(drink("cortado", "Cortado", 3.0)).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);

        repo.update("latte", drink("", "Latte", 3.75)).await.unwrap();
        assert_eq!(repo.get("latte").await.unwrap().price, 3.75);

        repo.delete("cortado").await.unwrap();
        assert!(matches!(
            repo.get("cortado").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_uniqueness() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.add(drink("latte", "Latte", 3.5)).await.unwrap();
        repo.add(drink("mocha", "Mocha", 4.0)).await.unwrap();

        assert!(matches!(
            repo.add(drink("latte2", "Latte", 1.0)).await,
            Err(StoreError::Duplicate { .. })
        ));
        assert!(matches!(
            repo.update("mocha", drink("latte", "Mocha", 4.0)).await,
            Err(StoreError::Duplicate { .. })
        ));
        assert!(matches!(
            repo.update("ghost", drink("ghost", "Ghost", 1.0)).await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
