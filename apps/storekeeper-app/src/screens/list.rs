//! # Product List Screen
//!
//! Shows every product and lets the user delete one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Products                                          [+ Add]      │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │ [img] Rice            Qty: 10        ₦5000.00   [Edit]  │   │
//! │  │ [img] Garri           Qty: 4         ₦1500.00   [Edit]  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │           │                                                     │
//! │           ▼ (on focus, after every add / edit / delete)        │
//! │  load_products(db, config) → Vec<ProductDto>                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};
use ts_rs::TS;

use super::{Notice, Outcome};
use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use storekeeper_core::{CoreError, Product};
use storekeeper_db::WriteOutcome;

/// Product row as the list renders it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    /// Price with currency symbol, e.g. "₦5000.00".
    pub price_label: String,
    pub image: Option<String>,
}

impl ProductDto {
    pub fn new(product: Product, config: &ConfigState) -> Self {
        ProductDto {
            price_label: config.format_price(product.price),
            id: product.id,
            product_name: product.product_name,
            quantity: product.quantity,
            price: product.price,
            image: product.image,
        }
    }
}

/// Loads the product list.
///
/// ## Returns
/// Every product in insertion order; empty when the store has none.
pub async fn load_products(db: &DbState, config: &ConfigState) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();

    let products = db.inner().products().list_all().await?;
    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| ProductDto::new(p, config))
        .collect();

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "load_products complete"
    );

    Ok(dtos)
}

/// Deletes a product from the list screen.
///
/// Never navigates; the host reloads the list after showing the notice.
pub async fn delete_product(db: &DbState, id: i64) -> Outcome {
    debug!(id, "delete_product action");

    let result = match db.inner().products().delete(id).await {
        Ok(WriteOutcome::Applied) => Ok(()),
        Ok(WriteOutcome::NoMatchingRow) => Err(ApiError::from(CoreError::ProductNotFound(id))),
        Err(e) => Err(ApiError::from(e)),
    };

    match result {
        Ok(()) => {
            info!(id, "Product deleted");
            Outcome::stay(Notice::success("Product deleted successfully!"))
        }
        Err(e) => Outcome::stay(Notice::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::NoticeKind;
    use storekeeper_core::ProductInput;
    use storekeeper_db::{Database, DbConfig};

    async fn test_state() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    async fn insert(db: &DbState, name: &str, quantity: i64, price: f64) -> i64 {
        db.inner()
            .products()
            .insert(&ProductInput {
                product_name: name.to_string(),
                quantity,
                price,
                image: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let db = test_state().await;
        let list = load_products(&db, &ConfigState::default()).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_list_has_price_labels() {
        let db = test_state().await;
        insert(&db, "Rice", 10, 5000.0).await;
        insert(&db, "Beans", 3, 12.5).await;

        let list = load_products(&db, &ConfigState::default()).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].product_name, "Rice");
        assert_eq!(list[0].price_label, "₦5000.00");
        assert_eq!(list[1].price_label, "₦12.50");
    }

    #[tokio::test]
    async fn test_delete_product() {
        let db = test_state().await;
        let id = insert(&db, "Rice", 10, 5000.0).await;

        let outcome = delete_product(&db, id).await;
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.message, "Product deleted successfully!");
        assert!(outcome.route.is_none());

        assert!(load_products(&db, &ConfigState::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let db = test_state().await;

        let outcome = delete_product(&db, 42).await;
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.message, "Product not found");
        assert!(outcome.route.is_none());
    }

    #[tokio::test]
    async fn test_closed_store_gives_generic_error() {
        let db = test_state().await;
        db.inner().close().await;

        let err = load_products(&db, &ConfigState::default()).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::DatabaseError);

        let outcome = delete_product(&db, 1).await;
        assert!(outcome.notice.is_error());
        assert!(outcome.route.is_none());
    }
}
