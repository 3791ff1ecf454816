//! # Add Product Screen
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Add Product                                                    │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │ Name:     [Rice            ]                            │   │
//! │  │ Quantity: [10              ]                            │   │
//! │  │ Price:    [5000            ]                            │   │
//! │  │ Photo:    [Take photo] [Choose from gallery]            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │           │  [Add Product]                                      │
//! │           ▼                                                     │
//! │  submit(db)                                                    │
//! │   ├── invalid  → error notice, stay, form kept                 │
//! │   ├── saved    → "Product added successfully!", form cleared,  │
//! │   │              go to product list                            │
//! │   └── db error → error notice, stay, form kept                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use super::{Notice, Outcome, Route};
use crate::error::ApiError;
use crate::state::{DbState, ProductForm};
use storekeeper_core::ImageSelection;

#[derive(Debug, Clone, Default)]
pub struct AddProductScreen {
    form: ProductForm,
}

impl AddProductScreen {
    pub fn new() -> Self {
        AddProductScreen::default()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Mutable access for the host's text inputs.
    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn set_image(&mut self, selection: ImageSelection) {
        self.form.set_image(selection);
    }

    /// Validates the form and inserts the product.
    pub async fn submit(&mut self, db: &DbState) -> Outcome {
        debug!("add_product submit");

        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                debug!(field = e.field(), "Add product rejected");
                return Outcome::stay(Notice::from(ApiError::from(e)));
            }
        };

        match db.inner().products().insert(&input).await {
            Ok(id) => {
                info!(id, name = %input.product_name, "Product added");
                self.form.reset();
                Outcome::navigate(Notice::success("Product added successfully!"), Route::ProductList)
            }
            Err(e) => Outcome::stay(Notice::from(ApiError::from(e))),
        }
    }
}
