//! # Validation Module
//!
//! Form validation for the add and edit screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (storekeeper-app)                                     │
//! │  └── Collects raw strings from the form                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name     → non-blank                                              │
//! │  ├── quantity → whole number, at least 1                               │
//! │  └── price    → finite decimal, not negative                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are checked in order name → quantity → price and the first
//! failure is returned; later fields are not looked at.
//!
//! ## Usage
//! ```rust
//! use storekeeper_core::validation::validate_product_form;
//!
//! let fields = validate_product_form("Rice", "5", "12.50").unwrap();
//! assert_eq!(fields.quantity, 5);
//! assert_eq!(fields.price, 12.5);
//! ```

use crate::error::ValidationError;
use crate::types::ProductFields;
use crate::MIN_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the three text inputs of the product form.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Add / Edit Product                                                     │
/// │                                                                         │
/// │  User taps "Add Product"                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_product_form(name, qty, price) ← THIS FUNCTION               │
/// │       │                                                                 │
/// │       ├── name blank?      → "Enter a product name"                    │
/// │       ├── qty bad or < 1?  → "Please enter a valid quantity"           │
/// │       ├── price bad?       → "Please enter a valid price"              │
/// │       │                                                                 │
/// │       └── OK → repository insert / update                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_product_form(
    product_name: &str,
    quantity: &str,
    price: &str,
) -> ValidationResult<ProductFields> {
    let product_name = validate_product_name(product_name)?;
    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;

    Ok(ProductFields {
        product_name,
        quantity,
        price,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Rice ").unwrap(), "Rice");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name.to_string())
}

/// Parses a quantity.
///
/// ## Rules
/// - Must be a whole number (surrounding whitespace ignored)
/// - Must be at least [`MIN_QUANTITY`]
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidQuantity {
        value: raw.to_string(),
    };

    let qty: i64 = raw.trim().parse().map_err(|_| invalid())?;

    if qty < MIN_QUANTITY {
        return Err(invalid());
    }

    Ok(qty)
}

/// Parses a price.
///
/// ## Rules
/// - Must be a finite decimal number
/// - Zero is allowed (free items), negative values are not
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::parse_price;
///
/// assert_eq!(parse_price("12.50").unwrap(), 12.5);
/// assert!(parse_price("0").is_ok());
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let invalid = || ValidationError::InvalidPrice {
        value: raw.to_string(),
    };

    let price: f64 = raw.trim().parse().map_err(|_| invalid())?;

    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }

    // -0.0 would otherwise be stored with its sign
    Ok(price + 0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
