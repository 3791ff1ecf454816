//! # Domain Types
//!
//! Core domain types used throughout StoreKeeper.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  raw form strings                                                       │
//! │       │  validate_product_form()                                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────┐  with_image()  ┌─────────────────┐                │
//! │  │  ProductFields  │ ─────────────► │  ProductInput   │ ──► insert /   │
//! │  │  name, qty,     │                │  + image URI    │     update     │
//! │  │  price          │                └─────────────────┘                │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                ┌─────────────────┐                │
//! │  │    Product      │ ◄── select ─── │    products     │                │
//! │  │  id (store)     │                │    (SQLite)     │                │
//! │  └─────────────────┘                └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `id` is assigned by the store on insert and never changes afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the `products` table.
///
/// Serialized field names match the column names (`productName`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "camelCase"))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier (AUTOINCREMENT).
    pub id: i64,

    /// Display name, never empty.
    pub product_name: String,

    /// Units on hand, at least one.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Local URI of the product photo.
    pub image: Option<String>,
}

// =============================================================================
// Validated Fields
// =============================================================================

/// Name, quantity and price after a successful validation pass.
///
/// Only [`crate::validation::validate_product_form`] produces this.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

impl ProductFields {
    /// Attaches the optional photo, giving the payload the repository writes.
    ///
    /// An empty URI is treated as no photo.
    pub fn with_image(self, image: Option<String>) -> ProductInput {
        ProductInput {
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            image: normalize_image(image),
        }
    }
}

// =============================================================================
// Write Payload
// =============================================================================

/// Every mutable column of a product row.
///
/// Used by both insert and update; update overwrites all of these.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub image: Option<String>,
}

// =============================================================================
// Image Selection
// =============================================================================

/// Result of the host's camera or gallery picker.
///
/// The URI is opaque: nothing here checks that the file exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "uri", rename_all = "snake_case")]
#[ts(export)]
pub enum ImageSelection {
    /// User dismissed the picker.
    Cancelled,
    /// User picked or captured a photo.
    Selected(String),
}

impl ImageSelection {
    /// Returns the picked URI, if any.
    pub fn into_uri(self) -> Option<String> {
        match self {
            ImageSelection::Cancelled => None,
            ImageSelection::Selected(uri) => normalize_image(Some(uri)),
        }
    }
}

/// Maps blank URIs to `None`.
fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|uri| !uri.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> Product {
        Product {
            id: 1,
            product_name: "Rice".to_string(),
            quantity: 10,
            price: 5000.0,
            image: None,
        }
    }

    #[test]
    fn test_product_serializes_with_column_names() {
        let json = serde_json::to_value(rice()).unwrap();
        assert_eq!(json["productName"], "Rice");
        assert_eq!(json["quantity"], 10);
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_empty_image_is_absent() {
        let fields = ProductFields {
            product_name: "Beans".to_string(),
            quantity: 2,
            price: 1.5,
        };

        let input = fields.clone().with_image(Some(String::new()));
        assert_eq!(input.image, None);

        let input = fields.with_image(Some("file:///photos/beans.jpg".to_string()));
        assert_eq!(input.image.as_deref(), Some("file:///photos/beans.jpg"));
    }

    #[test]
    fn test_image_selection() {
        assert_eq!(ImageSelection::Cancelled.into_uri(), None);
        assert_eq!(
            ImageSelection::Selected("file:///a.jpg".to_string()).into_uri(),
            Some("file:///a.jpg".to_string())
        );
    }
}
