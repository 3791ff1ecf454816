//! # Edit Product Screen
//!
//! Opened from a list row with the product id. The form starts pre-filled
//! with the stored values and `submit` overwrites every column.
//!
//! ```text
//! open(db, id)
//!   ├── found      → screen with pre-filled form
//!   ├── missing    → "Product not found", go back
//!   └── db error   → "Failed to load product", go back
//!
//! submit(db)
//!   ├── invalid    → error notice, stay
//!   ├── updated    → "Product updated successfully!", go back
//!   ├── row gone   → "Product not found", go back
//!   └── db error   → error notice, stay
//! ```

use tracing::{debug, info, warn};

use super::{Notice, Outcome, Route};
use crate::error::ApiError;
use crate::state::{DbState, ProductForm};
use storekeeper_core::{CoreError, ImageSelection};
use storekeeper_db::WriteOutcome;

#[derive(Debug, Clone)]
pub struct EditProductScreen {
    id: i64,
    form: ProductForm,
}

impl EditProductScreen {
    /// Loads the product and pre-fills the form.
    ///
    /// ## Returns
    /// * `Ok(EditProductScreen)` - Ready to edit
    /// * `Err(Outcome)` - Error notice plus `Route::Back`; the screen
    ///   should not be shown
    pub async fn open(db: &DbState, id: i64) -> Result<Self, Outcome> {
        debug!(id, "edit_product open");

        match db.inner().products().get_by_id(id).await {
            Ok(Some(product)) => Ok(EditProductScreen {
                id,
                form: ProductForm::from_product(&product),
            }),
            Ok(None) => {
                warn!(id, "Edit requested for missing product");
                Err(go_back(CoreError::ProductNotFound(id).into()))
            }
            Err(e) => {
                let err = ApiError::from(e);
                Err(go_back(ApiError::new(err.code, "Failed to load product")))
            }
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn set_image(&mut self, selection: ImageSelection) {
        self.form.set_image(selection);
    }

    /// Validates the form and updates the product.
    pub async fn submit(&mut self, db: &DbState) -> Outcome {
        debug!(id = self.id, "edit_product submit");

        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                debug!(id = self.id, field = e.field(), "Edit product rejected");
                return Outcome::stay(Notice::from(ApiError::from(e)));
            }
        };

        match db.inner().products().update(self.id, &input).await {
            Ok(WriteOutcome::Applied) => {
                info!(id = self.id, "Product updated");
                Outcome::navigate(Notice::success("Product updated successfully!"), Route::Back)
            }
            Ok(WriteOutcome::NoMatchingRow) => {
                warn!(id = self.id, "Product vanished before update");
                go_back(CoreError::ProductNotFound(self.id).into())
            }
            Err(e) => Outcome::stay(Notice::from(ApiError::from(e))),
        }
    }
}

fn go_back(err: ApiError) -> Outcome {
    Outcome::navigate(Notice::from(err), Route::Back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::NoticeKind;
    use storekeeper_core::ProductInput;
    use storekeeper_db::{Database, DbConfig};

    async fn seeded() -> (DbState, i64) {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let id = db
            .inner()
            .products()
            .insert(&ProductInput {
                product_name: "Rice".to_string(),
                quantity: 10,
                price: 5000.0,
                image: Some("file:///rice.jpg".to_string()),
            })
            .await
            .unwrap();
        (db, id)
    }

    #[tokio::test]
    async fn test_open_prefills_form() {
        let (db, id) = seeded().await;

        let screen = EditProductScreen::open(&db, id).await.unwrap();
        assert_eq!(screen.id(), id);
        assert_eq!(screen.form().product_name, "Rice");
        assert_eq!(screen.form().quantity, "10");
        assert_eq!(screen.form().price, "5000");
        assert_eq!(screen.form().image.as_deref(), Some("file:///rice.jpg"));
    }

    #[tokio::test]
    async fn test_open_missing_goes_back() {
        let (db, id) = seeded().await;

        let outcome = EditProductScreen::open(&db, id + 1).await.unwrap_err();
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.message, "Product not found");
        assert_eq!(outcome.route, Some(Route::Back));
    }

    #[tokio::test]
    async fn test_open_on_failed_store_goes_back() {
        let (db, id) = seeded().await;
        db.inner().close().await;

        let outcome = EditProductScreen::open(&db, id).await.unwrap_err();
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.message, "Failed to load product");
        assert_eq!(outcome.route, Some(Route::Back));
    }

    #[tokio::test]
    async fn test_submit_updates_and_goes_back() {
        let (db, id) = seeded().await;

        let mut screen = EditProductScreen::open(&db, id).await.unwrap();
        screen.form_mut().set_quantity("8");
        screen.set_image(ImageSelection::Cancelled);

        let outcome = screen.submit(&db).await;
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.message, "Product updated successfully!");
        assert_eq!(outcome.route, Some(Route::Back));

        let product = db.inner().products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.quantity, 8);
        assert_eq!(product.price, 5000.0);
        assert_eq!(product.image.as_deref(), Some("file:///rice.jpg"));
    }

    #[tokio::test]
    async fn test_invalid_edit_leaves_row_untouched() {
        let (db, id) = seeded().await;

        let mut screen = EditProductScreen::open(&db, id).await.unwrap();
        screen.form_mut().set_price("free");

        let outcome = screen.submit(&db).await;
        assert_eq!(outcome.notice.message, "Please enter a valid price");
        assert!(outcome.route.is_none());

        let product = db.inner().products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.price, 5000.0);
    }

    #[tokio::test]
    async fn test_row_deleted_while_editing() {
        let (db, id) = seeded().await;

        let mut screen = EditProductScreen::open(&db, id).await.unwrap();
        db.inner().products().delete(id).await.unwrap();

        let outcome = screen.submit(&db).await;
        assert_eq!(outcome.notice.message, "Product not found");
        assert_eq!(outcome.route, Some(Route::Back));
        assert!(db.inner().products().list_all().await.unwrap().is_empty());
    }
}
