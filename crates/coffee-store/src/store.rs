//! # Data Store
//!
//! Opens the data directory and hands out repositories.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory                                     │
//! │                                                                         │
//! │  StoreConfig::new(dir)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataStore::open(config).await ← creates dir if missing                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <dir>/                                                                 │
//! │  ├── inventory.json    ◄── Arc<JsonCollection<InventoryItem>>          │
//! │  ├── menu_items.json   ◄── Arc<JsonCollection<MenuItem>>               │
//! │  └── orders.json       ◄── Arc<JsonCollection<Order>>                  │
//! │                                                                         │
//! │  store.inventory() / store.menu() / store.orders()                     │
//! │  (cheap clones sharing the collections above)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use coffee_core::{InventoryItem, MenuItem, Order};
use tracing::{debug, info};

use crate::collection::JsonCollection;
use crate::error::{StoreError, StoreResult};
use crate::repository::{InventoryRepository, MenuRepository, OrderRepository};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data").orders_file("orders-dev.json");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection files. Created if missing.
    pub data_dir: PathBuf,

    /// Default: `inventory.json`
    pub inventory_file: String,

    /// Default: `menu_items.json`
    pub menu_file: String,

    /// Default: `orders.json`
    pub orders_file: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            inventory_file: "inventory.json".to_string(),
            menu_file: "menu_items.json".to_string(),
            orders_file: "orders.json".to_string(),
        }
    }

    pub fn orders_file(mut self, name: impl Into<String>) -> Self {
        self.orders_file = name.into();
        self
    }
}

// =============================================================================
// DataStore
// =============================================================================

/// Main store handle providing repository access.
#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
    inventory: Arc<JsonCollection<InventoryItem>>,
    menu: Arc<JsonCollection<MenuItem>>,
    orders: Arc<JsonCollection<Order>>,
}

impl DataStore {
    /// Opens (and if needed creates) the data directory.
    ///
    /// Collection files are not created here; a missing file reads as an
    /// empty collection and is written on first change.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = %config.data_dir.display(), "Opening data directory");

        tokio::fs::create_dir_all(&config.data_dir)
            .await
            .map_err(|e| StoreError::io(&config.data_dir, e))?;

        let dir = &config.data_dir;
        let store = DataStore {
            data_dir: dir.clone(),
            inventory: Arc::new(JsonCollection::new(dir.join(&config.inventory_file))),
            menu: Arc::new(JsonCollection::new(dir.join(&config.menu_file))),
            orders: Arc::new(JsonCollection::new(dir.join(&config.orders_file))),
        };

        debug!(
            inventory = %store.inventory.path().display(),
            menu = %store.menu.path().display(),
            orders = %store.orders.path().display(),
            "Collections ready"
        );
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the inventory repository.
    pub fn inventory(&self) -> InventoryRepository {
        InventoryRepository::new(Arc::clone(&self.inventory))
    }

    /// Returns the menu repository.
    pub fn menu(&self) -> MenuRepository {
        MenuRepository::new(Arc::clone(&self.menu))
    }

    /// Returns the order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(Arc::clone(&self.orders))
    }

    /// Empties all three collections.
    pub async fn reset(&self) -> StoreResult<()> {
        self.inventory.replace_all(&[]).await?;
        self.menu.replace_all(&[]).await?;
        self.orders.replace_all(&[]).await?;
        info!("All collections reset");
        Ok(())
    }

    /// Checks if the data directory can be read.
    ///
    /// ## Returns
    /// * `true` - Directory is readable
    /// * `false` - Directory is gone or not accessible
    pub async fn health_check(&self) -> bool {
        tokio::fs::read_dir(&self.data_dir).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("nested").join("data");

        let store = DataStore::open(StoreConfig::new(&dir)).await.unwrap();
        assert!(dir.is_dir());
        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_fails_when_directory_is_gone() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("data");
        let store = DataStore::open(StoreConfig::new(&dir)).await.unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(!store.health_check().await);
    }

    #[tokio::test]
    async fn test_reset_writes_empty_arrays() {
        let root = TempDir::new().unwrap();
        let store = DataStore::open(StoreConfig::new(root.path())).await.unwrap();
        store
            .inventory()
            .add(InventoryItem {
                ingredient_id: "milk".into(),
                name: "Milk".into(),
                quantity: 1.0,
                unit: "l".into(),
            })
            .await
            .unwrap();

        store.reset().await.unwrap();

        assert!(store.inventory().list().await.unwrap().is_empty());
        let raw = std::fs::read_to_string(root.path().join("orders.json")).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/coffee").orders_file("o.json");
        assert_eq!(config.orders_file, "o.json");
        assert_eq!(config.inventory_file, "inventory.json");
        assert_eq!(config.menu_file, "menu_items.json");
    }
}
