//! # Product Form State
//!
//! The raw text the user typed on the add or edit screen, plus the
//! picked photo. Nothing here is parsed until [`ProductForm::validate`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use storekeeper_core::validation::{validate_product_form, ValidationResult};
use storekeeper_core::{ImageSelection, Product, ProductInput};

/// Form contents as the UI host shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    /// Opaque URI from the picker.
    pub image: Option<String>,
}

impl ProductForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        ProductForm::default()
    }

    /// Pre-fills the form with a stored product (edit screen).
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            product_name: product.product_name.clone(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }

    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.product_name = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.quantity = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
    }

    /// Applies a picker result. A cancelled pick keeps the current photo.
    pub fn set_image(&mut self, selection: ImageSelection) {
        if let Some(uri) = selection.into_uri() {
            self.image = Some(uri);
        }
    }

    /// Runs the form validator and builds the write payload.
    pub fn validate(&self) -> ValidationResult<ProductInput> {
        let fields = validate_product_form(&self.product_name, &self.quantity, &self.price)?;
        Ok(fields.with_image(self.image.clone()))
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = ProductForm::default();
    }
}
