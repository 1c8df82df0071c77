//! Menu service.
//!
//! ## Add / Update Flow
//! ```text
//! MenuItem ──► validate_menu_item() ── fail ──► 400
//!                 │
//!                 ▼
//!          every ingredient in inventory? ── no ──► 404 "following ingredients missing: a, b"
//!                 │
//!                 ▼
//!          store.menu().add / update ── duplicate ──► 409
//! ```

use std::collections::HashSet;

use coffee_core::validation::validate_menu_item;
use coffee_core::{CoreError, MenuItem};
use coffee_store::DataStore;
use tracing::warn;

use crate::error::ApiResult;
use crate::services::WorkflowLock;

#[derive(Debug, Clone)]
pub struct MenuService {
    store: DataStore,
    lock: WorkflowLock,
}

impl MenuService {
    pub fn new(store: DataStore, lock: WorkflowLock) -> Self {
        MenuService { store, lock }
    }

    pub async fn list(&self) -> ApiResult<Vec<MenuItem>> {
        Ok(self.store.menu().list().await?)
    }

    pub async fn get(&self, product_id: &str) -> ApiResult<MenuItem> {
        Ok(self.store.menu().get(product_id).await?)
    }

    pub async fn add(&self, item: MenuItem) -> ApiResult<MenuItem> {
        validate_menu_item(&item, true).map_err(CoreError::from)?;

        let _guard = self.lock.lock().await;
        self.ensure_ingredients_exist(&item).await?;
        self.store.menu().add(item.clone()).await?;
        Ok(item)
    }

    /// Replaces a menu item. A blank id in the body keeps `product_id`.
    pub async fn update(&self, product_id: &str, item: MenuItem) -> ApiResult<()> {
        validate_menu_item(&item, false).map_err(CoreError::from)?;

        let _guard = self.lock.lock().await;
        self.ensure_ingredients_exist(&item).await?;
        self.store.menu().update(product_id, item).await?;
        Ok(())
    }

    pub async fn delete(&self, product_id: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().await;
        self.store.menu().delete(product_id).await?;
        Ok(())
    }

    async fn ensure_ingredients_exist(&self, item: &MenuItem) -> ApiResult<()> {
        let inventory = self.store.inventory().list().await?;
        let known: HashSet<&str> = inventory.iter().map(|i| i.ingredient_id.as_str()).collect();

        let missing: Vec<String> = item
            .ingredients
            .iter()
            .filter(|ing| !known.contains(ing.ingredient_id.as_str()))
            .map(|ing| ing.ingredient_id.clone())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        warn!(product_id = %item.product_id, missing = ?missing, "Menu item references unknown ingredients");
        Err(CoreError::MissingIngredients(missing).into())
    }
}
