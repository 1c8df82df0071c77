//! Report service: read-only aggregation over closed orders.

use coffee_core::reports::{popular_items, total_sales};
use coffee_core::workflow::menu_index;
use coffee_core::{TotalSales, POPULAR_ITEMS_COUNT};
use coffee_store::DataStore;
use tracing::debug;

use crate::error::ApiResult;

#[derive(Debug, Clone)]
pub struct ReportService {
    store: DataStore,
}

impl ReportService {
    pub fn new(store: DataStore) -> Self {
        ReportService { store }
    }

    pub async fn total_sales(&self) -> ApiResult<TotalSales> {
        let orders = self.store.orders().list().await?;
        let menu = menu_index(self.store.menu().list().await?);
        let total = total_sales(&orders, &menu)?;
        debug!(total = total.total_sales, "Total sales computed");
        Ok(total)
    }

    pub async fn popular_items(&self) -> ApiResult<Vec<String>> {
        let orders = self.store.orders().list().await?;
        Ok(popular_items(&orders, POPULAR_ITEMS_COUNT)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use chrono::Utc;
    use coffee_core::{Order, OrderItem, OrderStatus};
    use coffee_store::StoreConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_shop() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open(StoreConfig::new(dir.path())).await.unwrap();
        let reports = ReportService::new(store);

        assert_eq!(reports.total_sales().await.unwrap().total_sales, 0.0);
        assert!(matches!(
            reports.popular_items().await,
            Err(ApiError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_total_sales_with_deleted_menu_item_fails() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open(StoreConfig::new(dir.path())).await.unwrap();
        store
            .orders()
            .add(Order {
                order_id: "o-1".into(),
                customer_name: "Heidi".into(),
                items: vec![OrderItem {
                    product_id: "retired".into(),
                    quantity: 1,
                }],
                status: OrderStatus::Closed,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let reports = ReportService::new(store);
        let err = reports.total_sales().await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.to_string(), "menu item 'retired' not found");
    }
}
