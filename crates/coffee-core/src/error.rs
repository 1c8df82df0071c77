//! # Error Types
//!
//! Domain-specific error types for coffee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coffee-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule failures                         │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── ErrorKind        - Transport-neutral classification               │
//! │                                                                         │
//! │  coffee-store errors (separate crate)                                  │
//! │  └── StoreError       - File / serialization failures                  │
//! │                                                                         │
//! │  coffee-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP status            │
//! │                          StoreError ↗                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Classification
//! Every error in the workspace reports an [`ErrorKind`]. The HTTP layer maps
//! kinds to status codes with a single exhaustive `match`, so no caller ever
//! inspects message text to decide what went wrong.

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Transport-neutral classification of a failure.
///
/// ```text
/// Validation      → malformed / missing / out-of-range input   (400)
/// Conflict        → duplicate identifiers, rule rejections     (409)
/// NotFound        → unknown id                                 (404)
/// Infrastructure  → file I/O or serialization failure          (500)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Infrastructure,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are translated to HTTP responses in the app layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored order references a product that is no longer on the menu.
    ///
    /// ## When This Occurs
    /// - A closed order references a product that was deleted from the menu
    ///   and a sales report is requested
    ///
    /// Classified as infrastructure: the stored data is inconsistent, the
    /// request itself is fine.
    #[error("menu item '{0}' not found")]
    MenuItemNotFound(String),

    /// Order cannot be found.
    #[error("order '{0}' not found")]
    OrderNotFound(String),

    /// A menu item references ingredients that are not in the inventory.
    ///
    /// ## When This Occurs
    /// ```text
    /// POST /menu { ingredients: [espresso_shot, oat_milk] }
    ///      │
    ///      ▼
    /// inventory has: espresso_shot
    ///      │
    ///      ▼
    /// MissingIngredients(["oat_milk"])
    ///      │
    ///      ▼
    /// 404 "following ingredients missing: oat_milk"
    /// ```
    #[error("following ingredients missing: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),

    /// Fewer distinct products have been sold than the ranking needs.
    #[error("not enough menu items to achieve result: need {needed}, have {available}")]
    NotEnoughSales { needed: usize, available: usize },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::OrderNotFound(_) => ErrorKind::NotFound,
            CoreError::MissingIngredients(_) => ErrorKind::NotFound,
            CoreError::MenuItemNotFound(_) => ErrorKind::Infrastructure,
            // The ranking endpoint guarantees exactly N rows or an error;
            // the shortfall is reported as a server-side failure.
            CoreError::NotEnoughSales { .. } => ErrorKind::Infrastructure,
            CoreError::Validation(_) => ErrorKind::Validation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any store is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// A list that must have entries is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// The same key appears twice in a list.
    #[error("{field} '{value}' is listed more than once")]
    Repeated { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ingredients_message_names_every_id() {
        let err = CoreError::MissingIngredients(vec!["oat_milk".into(), "vanilla".into()]);
        assert_eq!(
            err.to_string(),
            "following ingredients missing: oat_milk, vanilla"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "ingredients".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_not_enough_sales_is_server_side() {
        let err = CoreError::NotEnoughSales {
            needed: 3,
            available: 1,
        };
        assert_eq!(err.kind(), ErrorKind::Infrastructure);
    }
}
