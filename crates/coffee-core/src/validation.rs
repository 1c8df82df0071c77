//! # Validation Module
//!
//! Input validation for inventory and menu records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum Json<T>)                                │
//! │  └── Type validation (deserialization) → 400 on malformed body         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules (required, positive, finite) → 400                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Uniqueness of id and name → 409                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders are not validated here. Order problems are collected as
//! conflicts by [`crate::workflow`] so that a client sees all of them at once.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{InventoryItem, MenuItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a string field has non-whitespace content.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be finite
/// - Must be >= 0 (an empty shelf is fine)
pub fn validate_stock_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }
    if quantity < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a strictly positive amount (prices, recipe quantities).
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an inventory record before it is added or updated.
///
/// On update an empty `ingredient_id` means "keep the current id", so the
/// caller passes `require_id = false`.
pub fn validate_inventory_item(item: &InventoryItem, require_id: bool) -> ValidationResult<()> {
    if require_id {
        validate_required("ingredient_id", &item.ingredient_id)?;
    }
    validate_required("name", &item.name)?;
    validate_required("unit", &item.unit)?;
    validate_stock_quantity(item.quantity)
}

/// Validates a menu record before it is added or updated.
///
/// ## Rules
/// - product_id (when required) and name present
/// - price finite and > 0
/// - at least one ingredient
/// - every ingredient has an id, a positive quantity, and appears once
pub fn validate_menu_item(item: &MenuItem, require_id: bool) -> ValidationResult<()> {
    if require_id {
        validate_required("product_id", &item.product_id)?;
    }
    validate_required("name", &item.name)?;
    validate_positive("price", item.price)?;

    if item.ingredients.is_empty() {
        return Err(ValidationError::Empty {
            field: "ingredients".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for ingredient in &item.ingredients {
        validate_required("ingredient_id", &ingredient.ingredient_id)?;
        validate_positive("ingredient quantity", ingredient.quantity)?;
        if !seen.insert(ingredient.ingredient_id.as_str()) {
            return Err(ValidationError::Repeated {
                field: "ingredient_id".to_string(),
                value: ingredient.ingredient_id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuIngredient;

    fn flour(quantity: f64) -> InventoryItem {
        InventoryItem {
            ingredient_id: "flour".into(),
            name: "Flour".into(),
            quantity,
            unit: "g".into(),
        }
    }

    fn latte() -> MenuItem {
        MenuItem {
            product_id: "latte".into(),
            name: "Latte".into(),
            description: String::new(),
            price: 3.5,
            ingredients: vec![MenuIngredient {
                ingredient_id: "milk".into(),
                quantity: 200.0,
            }],
        }
    }

    #[test]
    fn test_validate_inventory_item() {
        assert!(validate_inventory_item(&flour(100.0), true).is_ok());
        assert!(validate_inventory_item(&flour(0.0), true).is_ok());

        assert_eq!(
            validate_inventory_item(&flour(-1.0), true),
            Err(ValidationError::MustBeNonNegative {
                field: "quantity".into()
            })
        );
        assert!(validate_inventory_item(&flour(f64::NAN), true).is_err());

        let mut nameless = flour(1.0);
        nameless.name = "  ".into();
        assert!(validate_inventory_item(&nameless, true).is_err());
    }

    #[test]
    fn test_inventory_id_optional_on_update() {
        let mut item = flour(5.0);
        item.ingredient_id.clear();
        assert!(validate_inventory_item(&item, true).is_err());
        assert!(validate_inventory_item(&item, false).is_ok());
    }

    #[test]
    fn test_validate_menu_item() {
        assert!(validate_menu_item(&latte(), true).is_ok());

        let mut free = latte();
        free.price = 0.0;
        assert!(validate_menu_item(&free, true).is_err());

        let mut empty = latte();
        empty.ingredients.clear();
        assert_eq!(
            validate_menu_item(&empty, true),
            Err(ValidationError::Empty {
                field: "ingredients".into()
            })
        );

        let mut negative = latte();
        negative.ingredients[0].quantity = -5.0;
        assert!(validate_menu_item(&negative, true).is_err());
    }

    #[test]
    fn test_menu_item_rejects_repeated_ingredient() {
        let mut item = latte();
        item.ingredients.push(MenuIngredient {
            ingredient_id: "milk".into(),
            quantity: 10.0,
        });
        assert!(matches!(
            validate_menu_item(&item, true),
            Err(ValidationError::Repeated { .. })
        ));
    }
}
