//! # Error Types
//!
//! Domain-specific error types for storekeeper-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storekeeper-core errors (this file)                                   │
//! │  ├── CoreError        - Domain errors (product not found)              │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  storekeeper-db errors (separate crate)                                │
//! │  └── DbError          - Store read/write failures                      │
//! │                                                                         │
//! │  storekeeper-app errors                                                │
//! │  └── ApiError         - What the screen shows                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product row carries this id.
    ///
    /// ## When This Occurs
    /// - Edit screen opened for a row deleted in the meantime
    /// - Update or delete matched zero rows
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// One variant per form field. The validator stops at the first failing
/// field, so a single error is reported at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product name is empty or whitespace-only.
    #[error("empty name")]
    EmptyName,

    /// Quantity is not a whole number, or is below one.
    #[error("invalid quantity")]
    InvalidQuantity { value: String },

    /// Price is not a finite, non-negative decimal.
    #[error("invalid price")]
    InvalidPrice { value: String },
}

impl ValidationError {
    /// Name of the form field that failed, for inline highlighting.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "productName",
            ValidationError::InvalidQuantity { .. } => "quantity",
            ValidationError::InvalidPrice { .. } => "price",
        }
    }

    /// Message shown next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Enter a product name",
            ValidationError::InvalidQuantity { .. } => "Please enter a valid quantity",
            ValidationError::InvalidPrice { .. } => "Please enter a valid price",
        }
    }
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
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "empty name");

        let err = ValidationError::InvalidQuantity {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid quantity");
        assert_eq!(err.field(), "quantity");
        assert_eq!(err.user_message(), "Please enter a valid quantity");

        let err = ValidationError::InvalidPrice {
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "invalid price");
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyName.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::EmptyName)
        ));
    }
}
