//! # Sales Reports
//!
//! Read-only aggregation over closed orders.
//!
//! ```text
//! orders ──filter(status == closed)──┬──► Σ price × qty ────────► TotalSales
//!                                    │
//!                                    └──► Σ qty per product ──► sort ──► top N
//! ```
//!
//! Open orders contribute nothing to either report.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{Order, TotalSales};
use crate::workflow::MenuIndex;

/// Revenue over every closed order.
///
/// ## Errors
/// [`CoreError::MenuItemNotFound`] if any closed line references a product
/// that is no longer on the menu. No partial total is returned.
pub fn total_sales(orders: &[Order], menu: &MenuIndex) -> CoreResult<TotalSales> {
    let mut total = 0.0;

    for order in orders.iter().filter(|o| o.status.is_closed()) {
        for line in &order.items {
            let item = menu
                .get(&line.product_id)
                .ok_or_else(|| CoreError::MenuItemNotFound(line.product_id.clone()))?;
            total += item.price * line.quantity as f64;
        }
    }

    Ok(TotalSales { total_sales: total })
}

/// The `count` best-selling products as `"<product_id>: <quantity>"`.
///
/// Sorted by quantity descending, ties by product id ascending. Per-product
/// totals are `i128` and cannot overflow.
///
/// ## Errors
/// [`CoreError::NotEnoughSales`] if fewer than `count` distinct products
/// appear in closed orders.
pub fn popular_items(orders: &[Order], count: usize) -> CoreResult<Vec<String>> {
    let mut sold: HashMap<&str, i128> = HashMap::new();
    for order in orders.iter().filter(|o| o.status.is_closed()) {
        for line in &order.items {
            *sold.entry(line.product_id.as_str()).or_insert(0) += i128::from(line.quantity);
        }
    }

    if sold.len() < count {
        return Err(CoreError::NotEnoughSales {
            needed: count,
            available: sold.len(),
        });
    }

    let mut ranked: Vec<(&str, i128)> = sold.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    Ok(ranked
        .into_iter()
        .take(count)
        .map(|(id, qty)| format!("{id}: {qty}"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuIngredient, MenuItem, OrderItem, OrderStatus};
    use crate::workflow::menu_index;
    use chrono::Utc;

    fn priced(id: &str, price: f64) -> MenuItem {
        MenuItem {
            product_id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            ingredients: vec![MenuIngredient {
                ingredient_id: "beans".into(),
                quantity: 1.0,
            }],
        }
    }

    fn order(status: OrderStatus, lines: &[(&str, i64)]) -> Order {
        Order {
            order_id: "o".into(),
            customer_name: "Eve".into(),
            items: lines
                .iter()
                .map(|(p, q)| OrderItem {
                    product_id: (*p).into(),
                    quantity: *q,
                })
                .collect(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_sales_counts_closed_only() {
        let menu = menu_index([priced("latte", 3.5), priced("mocha", 4.0)]);
        let orders = vec![
            order(OrderStatus::Closed, &[("latte", 2), ("mocha", 1)]),
            order(OrderStatus::Open, &[("latte", 10)]),
        ];

        let total = total_sales(&orders, &menu).unwrap();
        assert_eq!(total.total_sales, 11.0);
    }

    #[test]
    fn test_total_sales_fails_on_unknown_product() {
        let menu = menu_index([priced("latte", 3.5)]);
        let orders = vec![order(OrderStatus::Closed, &[("latte", 1), ("gone", 1)])];

        let err = total_sales(&orders, &menu).unwrap_err();
        assert!(matches!(err, CoreError::MenuItemNotFound(ref id) if id == "gone"));
    }

    #[test]
    fn test_popular_items_ranking_and_tie_break() {
        let orders = vec![
            order(OrderStatus::Closed, &[("mocha", 2), ("latte", 5)]),
            order(OrderStatus::Closed, &[("americano", 2), ("tea", 1)]),
            order(OrderStatus::Open, &[("tea", 50)]),
        ];

        let ranked = popular_items(&orders, 3).unwrap();
        assert_eq!(ranked, vec!["latte: 5", "americano: 2", "mocha: 2"]);
    }

    #[test]
    fn test_popular_items_sums_past_i64_max() {
        let orders = vec![
            order(OrderStatus::Closed, &[("latte", i64::MAX), ("latte", 1), ("mocha", 1)]),
            order(OrderStatus::Closed, &[("latte", i64::MAX), ("tea", 2)]),
        ];

        let ranked = popular_items(&orders, 3).unwrap();
        assert_eq!(
            ranked,
            vec!["latte: 18446744073709551615", "tea: 2", "mocha: 1"]
        );
    }

    #[test]
    fn test_popular_items_needs_enough_products() {
        let orders = vec![order(OrderStatus::Closed, &[("latte", 1), ("mocha", 1)])];

        let err = popular_items(&orders, 3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotEnoughSales {
                needed: 3,
                available: 2
            }
        ));
    }
}
