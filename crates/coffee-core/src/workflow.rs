//! # Order Workflow Rules
//!
//! The pure half of the order workflow: structural checks, recipe
//! resolution, stock comparison and the stock deltas to commit.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       plan_order()                                      │
//! │                                                                         │
//! │  1. structural_conflicts()                                             │
//! │     └── id / customer / items / quantities / id taken                  │
//! │         any conflict? ──────────────────────────► Reject (no stock)    │
//! │                                                                         │
//! │  2. previous version present? (update)                                 │
//! │     └── resolve previous items → credit snapshot                       │
//! │                                                                         │
//! │  3. resolve_requirements(new items)                                    │
//! │     └── Σ recipe qty × line qty per ingredient (BTreeMap)              │
//! │                                                                         │
//! │  4. snapshot.check(requirements)                                       │
//! │     └── negative / missing / insufficient                              │
//! │         any conflict? ──────────────────────────► Reject (no stock)    │
//! │                                                                         │
//! │  5. Accept(net deltas = credit(previous) − debit(new))                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here writes anything. The caller owns the snapshot, the lock
//! and the single `adjust_quantities` call that makes a plan durable.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::types::{InventoryItem, MenuItem, Order, OrderItem};

/// Signed stock changes keyed by ingredient id. Positive values credit.
pub type StockDeltas = BTreeMap<String, f64>;

/// Menu items keyed by product id.
pub type MenuIndex = HashMap<String, MenuItem>;

/// Builds a [`MenuIndex`] from a menu listing.
pub fn menu_index(items: impl IntoIterator<Item = MenuItem>) -> MenuIndex {
    items
        .into_iter()
        .map(|item| (item.product_id.clone(), item))
        .collect()
}

// =============================================================================
// Conflicts
// =============================================================================

/// A client-correctable reason to reject an order.
///
/// Conflicts are collected, never short-circuited, and rendered to the
/// client as their `Display` strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Conflict {
    EmptyOrderId,
    EmptyCustomerName,
    EmptyItems,
    OrderIdTaken,
    InvalidQuantity { product_id: String, quantity: i64 },
    UnknownMenuItem(String),
    NegativeRecipe(String),
    MissingIngredient(String),
    Insufficient {
        ingredient_id: String,
        required: f64,
        available: f64,
        unit: String,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::EmptyOrderId => f.write_str("order id is empty"),
            Conflict::EmptyCustomerName => f.write_str("customer name is empty"),
            Conflict::EmptyItems => f.write_str("order items is empty"),
            Conflict::OrderIdTaken => f.write_str("order id already exists"),
            Conflict::InvalidQuantity {
                product_id,
                quantity,
            } => write!(f, "invalid quantity {quantity} for product '{product_id}'"),
            Conflict::UnknownMenuItem(id) => write!(f, "menu item '{id}' not found"),
            Conflict::NegativeRecipe(id) => write!(f, "ingredient {id} has negative value"),
            Conflict::MissingIngredient(id) => write!(f, "ingredient {id} not found"),
            // Quantities are truncated to whole units in the message.
            Conflict::Insufficient {
                ingredient_id,
                required,
                available,
                unit,
            } => write!(
                f,
                "Insufficient inventory for ingredient '{}'. Required: {}{}, Available: {}{}",
                ingredient_id,
                required.trunc() as i64,
                unit,
                available.trunc() as i64,
                unit
            ),
        }
    }
}

/// Structural checks on an order, all collected.
///
/// `id_taken` is decided by the caller: on create it means any stored order
/// has this id, on update it means a *different* stored order has it.
pub fn structural_conflicts(order: &Order, id_taken: bool) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if order.order_id.trim().is_empty() {
        conflicts.push(Conflict::EmptyOrderId);
    }
    if order.customer_name.trim().is_empty() {
        conflicts.push(Conflict::EmptyCustomerName);
    }
    if order.items.is_empty() {
        conflicts.push(Conflict::EmptyItems);
    }
    for item in &order.items {
        if item.quantity <= 0 {
            conflicts.push(Conflict::InvalidQuantity {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            });
        }
    }
    if id_taken {
        conflicts.push(Conflict::OrderIdTaken);
    }

    conflicts
}

// =============================================================================
// Requirements
// =============================================================================

/// Aggregated need for one ingredient.
///
/// The two sentinels let one pass report every problem instead of failing
/// on the first. Precedence when merging: missing > negative > amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    Amount(f64),
    NegativeRecipe,
    MissingIngredient,
}

impl Requirement {
    fn absorb(self, next: Requirement) -> Requirement {
        use Requirement::*;
        match (self, next) {
            (MissingIngredient, _) | (_, MissingIngredient) => MissingIngredient,
            (NegativeRecipe, _) | (_, NegativeRecipe) => NegativeRecipe,
            (Amount(a), Amount(b)) => Amount(a + b),
        }
    }
}

/// Per-ingredient requirements for a set of order lines, in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements(BTreeMap<String, Requirement>);

impl Requirements {
    #[cfg(test)]
    fn get(&self, ingredient_id: &str) -> Option<Requirement> {
        self.0.get(ingredient_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Requirement)> {
        self.0.iter().map(|(id, req)| (id.as_str(), *req))
    }

    fn add(&mut self, ingredient_id: &str, requirement: Requirement) {
        match self.0.get_mut(ingredient_id) {
            Some(current) => *current = current.absorb(requirement),
            None => {
                self.0.insert(ingredient_id.to_string(), requirement);
            }
        }
    }

    /// Deltas that consume every resolvable amount. Sentinels are skipped.
    pub fn debits(&self) -> StockDeltas {
        self.amounts().map(|(id, amount)| (id, -amount)).collect()
    }

    /// Deltas that return every resolvable amount. Sentinels are skipped.
    pub fn credits(&self) -> StockDeltas {
        self.amounts().collect()
    }

    fn amounts(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.0.iter().filter_map(|(id, req)| match req {
            Requirement::Amount(amount) => Some((id.clone(), *amount)),
            _ => None,
        })
    }
}

/// Resolves order lines to ingredient requirements.
///
/// Returns the requirements and the product ids that are not on the menu,
/// in line order. Unknown products contribute nothing.
pub fn resolve_requirements(
    items: &[OrderItem],
    menu: &MenuIndex,
    inventory: &InventorySnapshot,
) -> (Requirements, Vec<String>) {
    let mut requirements = Requirements::default();
    let mut unknown = Vec::new();

    for line in items {
        let Some(menu_item) = menu.get(&line.product_id) else {
            unknown.push(line.product_id.clone());
            continue;
        };

        for ingredient in &menu_item.ingredients {
            let requirement = if !inventory.contains(&ingredient.ingredient_id) {
                Requirement::MissingIngredient
            } else if ingredient.quantity < 0.0 {
                Requirement::NegativeRecipe
            } else {
                Requirement::Amount(ingredient.quantity * line.quantity as f64)
            };
            requirements.add(&ingredient.ingredient_id, requirement);
        }
    }

    (requirements, unknown)
}

// =============================================================================
// Inventory Snapshot
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Stock {
    quantity: f64,
    unit: String,
}

/// An in-memory copy of the inventory that plans are evaluated against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    stock: HashMap<String, Stock>,
}

impl InventorySnapshot {
    pub fn new(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let stock = items
            .into_iter()
            .map(|item| {
                (
                    item.ingredient_id,
                    Stock {
                        quantity: item.quantity,
                        unit: item.unit,
                    },
                )
            })
            .collect();
        Self { stock }
    }

    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.stock.contains_key(ingredient_id)
    }

    /// Applies deltas in place. Unknown ids are ignored.
    pub fn apply(&mut self, deltas: &StockDeltas) {
        for (id, delta) in deltas {
            if let Some(stock) = self.stock.get_mut(id) {
                stock.quantity += delta;
            }
        }
    }

    /// Compares requirements against current stock, in ingredient-id order.
    pub fn check(&self, requirements: &Requirements) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for (id, requirement) in requirements.iter() {
            match requirement {
                Requirement::MissingIngredient => {
                    conflicts.push(Conflict::MissingIngredient(id.to_string()));
                }
                Requirement::NegativeRecipe => {
                    conflicts.push(Conflict::NegativeRecipe(id.to_string()));
                }
                Requirement::Amount(required) => {
                    let Some(stock) = self.stock.get(id) else {
                        conflicts.push(Conflict::MissingIngredient(id.to_string()));
                        continue;
                    };
                    if required > stock.quantity {
                        conflicts.push(Conflict::Insufficient {
                            ingredient_id: id.to_string(),
                            required,
                            available: stock.quantity,
                            unit: stock.unit.clone(),
                        });
                    }
                }
            }
        }

        conflicts
    }
}

// =============================================================================
// Delta Helpers
// =============================================================================

/// Sums two delta maps per ingredient.
pub fn merge_deltas(mut base: StockDeltas, other: StockDeltas) -> StockDeltas {
    for (id, delta) in other {
        *base.entry(id).or_insert(0.0) += delta;
    }
    base
}

/// Negates every delta (used to compensate a committed plan).
pub fn invert_deltas(deltas: &StockDeltas) -> StockDeltas {
    deltas.iter().map(|(id, d)| (id.clone(), -d)).collect()
}

// =============================================================================
// Plan
// =============================================================================

/// The outcome of evaluating an order.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Commit these deltas, then persist the order.
    Accept(StockDeltas),
    /// Leave stock untouched and report these conflicts.
    Reject(Vec<Conflict>),
}

/// A [`Decision`] plus products of the previous version that could not be
/// credited because they are no longer on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlan {
    pub decision: Decision,
    pub stale_products: Vec<String>,
}

/// Evaluates an order (and, for updates, the version it replaces).
///
/// The previous version's reservation is credited to a copy of `inventory`
/// before the new version is checked, so shrinking an order never conflicts
/// with its own earlier reservation.
pub fn plan_order(
    order: &Order,
    id_taken: bool,
    previous: Option<&Order>,
    menu: &MenuIndex,
    inventory: &InventorySnapshot,
) -> OrderPlan {
    let structural = structural_conflicts(order, id_taken);
    if !structural.is_empty() {
        return OrderPlan {
            decision: Decision::Reject(structural),
            stale_products: Vec::new(),
        };
    }

    let mut snapshot = inventory.clone();
    let mut credit = StockDeltas::new();
    let mut stale_products = Vec::new();

    if let Some(previous) = previous {
        let (reserved, unknown) = resolve_requirements(&previous.items, menu, &snapshot);
        credit = reserved.credits();
        snapshot.apply(&credit);
        stale_products = unknown;
    }

    let (required, unknown) = resolve_requirements(&order.items, menu, &snapshot);
    let mut conflicts: Vec<Conflict> = unknown.into_iter().map(Conflict::UnknownMenuItem).collect();
    conflicts.extend(snapshot.check(&required));

    let decision = if conflicts.is_empty() {
        Decision::Accept(merge_deltas(credit, required.debits()))
    } else {
        Decision::Reject(conflicts)
    };

    OrderPlan {
        decision,
        stale_products,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuIngredient, OrderStatus};
    use chrono::Utc;

    fn stock(id: &str, quantity: f64, unit: &str) -> InventoryItem {
        InventoryItem {
            ingredient_id: id.into(),
            name: id.to_uppercase(),
            quantity,
            unit: unit.into(),
        }
    }

    fn recipe(id: &str, ingredients: &[(&str, f64)]) -> MenuItem {
        MenuItem {
            product_id: id.into(),
            name: id.into(),
            description: String::new(),
            price: 4.0,
            ingredients: ingredients
                .iter()
                .map(|(ing, q)| MenuIngredient {
                    ingredient_id: (*ing).into(),
                    quantity: *q,
                })
                .collect(),
        }
    }

    fn order(id: &str, lines: &[(&str, i64)]) -> Order {
        Order {
            order_id: id.into(),
            customer_name: "Dana".into(),
            items: lines
                .iter()
                .map(|(p, q)| OrderItem {
                    product_id: (*p).into(),
                    quantity: *q,
                })
                .collect(),
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    fn flour_shop() -> (MenuIndex, InventorySnapshot) {
        let menu = menu_index([recipe("latte", &[("flour", 50.0)])]);
        let inventory = InventorySnapshot::new([stock("flour", 100.0, "g")]);
        (menu, inventory)
    }

    #[test]
    fn test_exact_stock_is_enough() {
        let (menu, inventory) = flour_shop();
        let plan = plan_order(&order("o1", &[("latte", 2)]), false, None, &menu, &inventory);

        let mut expected = StockDeltas::new();
        expected.insert("flour".into(), -100.0);
        assert_eq!(plan.decision, Decision::Accept(expected));
    }

    #[test]
    fn test_insufficient_stock_is_reported_once() {
        let (menu, inventory) = flour_shop();
        let plan = plan_order(&order("o1", &[("latte", 3)]), false, None, &menu, &inventory);

        let Decision::Reject(conflicts) = plan.decision else {
            panic!("expected rejection");
        };
        assert_eq!(conflicts.len(), 1);
        assert_eq!(
            conflicts[0].to_string(),
            "Insufficient inventory for ingredient 'flour'. Required: 150g, Available: 100g"
        );
    }

    #[test]
    fn test_requirements_sum_across_lines() {
        let menu = menu_index([
            recipe("latte", &[("milk", 200.0), ("espresso", 1.0)]),
            recipe("flat_white", &[("milk", 120.0), ("espresso", 2.0)]),
        ]);
        let inventory =
            InventorySnapshot::new([stock("milk", 1000.0, "ml"), stock("espresso", 10.0, "shots")]);

        let (req, unknown) = resolve_requirements(
            &order("o", &[("latte", 2), ("flat_white", 1)]).items,
            &menu,
            &inventory,
        );
        assert!(unknown.is_empty());
        assert_eq!(req.get("milk"), Some(Requirement::Amount(520.0)));
        assert_eq!(req.get("espresso"), Some(Requirement::Amount(4.0)));
    }

    #[test]
    fn test_structural_conflicts_are_collected() {
        let mut bad = order("", &[("latte", 0), ("mocha", -2)]);
        bad.customer_name = " ".into();

        let messages: Vec<String> = structural_conflicts(&bad, true)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "order id is empty",
                "customer name is empty",
                "invalid quantity 0 for product 'latte'",
                "invalid quantity -2 for product 'mocha'",
                "order id already exists",
            ]
        );
        assert!(structural_conflicts(&order("o", &[]), false).contains(&Conflict::EmptyItems));
    }

    #[test]
    fn test_sentinels_and_unknown_products_reported_together() {
        let menu = menu_index([
            recipe("latte", &[("milk", 200.0), ("vanilla", 5.0)]),
            recipe("odd", &[("sugar", -1.0)]),
        ]);
        let inventory = InventorySnapshot::new([stock("milk", 100.0, "ml"), stock("sugar", 5.0, "g")]);

        let plan = plan_order(
            &order("o", &[("latte", 1), ("odd", 1), ("ghost", 1)]),
            false,
            None,
            &menu,
            &inventory,
        );
        let Decision::Reject(conflicts) = plan.decision else {
            panic!("expected rejection");
        };
        let messages: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "menu item 'ghost' not found",
                "Insufficient inventory for ingredient 'milk'. Required: 200ml, Available: 100ml",
                "ingredient sugar has negative value",
                "ingredient vanilla not found",
            ]
        );
    }

    #[test]
    fn test_missing_beats_negative_beats_amount() {
        use Requirement::*;
        assert_eq!(Amount(1.0).absorb(NegativeRecipe), NegativeRecipe);
        assert_eq!(NegativeRecipe.absorb(MissingIngredient), MissingIngredient);
        assert_eq!(MissingIngredient.absorb(Amount(3.0)), MissingIngredient);
        assert_eq!(Amount(1.0).absorb(Amount(2.5)), Amount(3.5));
    }

    #[test]
    fn test_update_credits_previous_reservation() {
        let (menu, _) = flour_shop();
        // The previous 2×latte already consumed all the flour.
        let inventory = InventorySnapshot::new([stock("flour", 0.0, "g")]);
        let previous = order("o1", &[("latte", 2)]);

        let plan = plan_order(&order("o1", &[("latte", 1)]), false, Some(&previous), &menu, &inventory);

        let mut expected = StockDeltas::new();
        expected.insert("flour".into(), 50.0);
        assert_eq!(plan.decision, Decision::Accept(expected));
    }

    #[test]
    fn test_rejected_update_produces_no_deltas() {
        let (menu, _) = flour_shop();
        let inventory = InventorySnapshot::new([stock("flour", 0.0, "g")]);
        let previous = order("o1", &[("latte", 2)]);

        let plan = plan_order(&order("o1", &[("latte", 3)]), false, Some(&previous), &menu, &inventory);
        assert!(matches!(plan.decision, Decision::Reject(ref c) if c.len() == 1));
    }

    #[test]
    fn test_stale_previous_products_are_skipped() {
        let (menu, inventory) = flour_shop();
        let previous = order("o1", &[("retired_scone", 1)]);

        let plan = plan_order(&order("o1", &[("latte", 1)]), false, Some(&previous), &menu, &inventory);
        assert_eq!(plan.stale_products, vec!["retired_scone".to_string()]);
        assert!(matches!(plan.decision, Decision::Accept(_)));
    }

    #[test]
    fn test_invert_and_merge() {
        let mut a = StockDeltas::new();
        a.insert("milk".into(), -10.0);
        let mut b = StockDeltas::new();
        b.insert("milk".into(), 4.0);
        b.insert("beans".into(), -1.0);

        let merged = merge_deltas(a, b);
        assert_eq!(merged["milk"], -6.0);
        assert_eq!(invert_deltas(&merged)["beans"], 1.0);
    }
}
