//! # Product Repository
//!
//! Database operations for products. Each method is exactly one statement
//! against the `products` table; there is no cache, so every read sees the
//! latest committed write.
//!
//! ## Missing Ids
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_by_id(99)  → Ok(None)                                              │
//! │  update(99, …)  → Ok(WriteOutcome::NoMatchingRow)   (0 rows affected)   │
//! │  delete(99)     → Ok(WriteOutcome::NoMatchingRow)   (0 rows affected)   │
//! │                                                                         │
//! │  None of these is a store error. Callers decide what to tell the user. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table's CHECK constraints reject blank names, quantities below one
//! and negative prices with `DbError::ConstraintViolation`, whoever built
//! the `ProductInput`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use storekeeper_core::{Product, ProductInput};

/// What an update or delete did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row existed and was changed.
    Applied,
    /// No row carried the id; nothing changed.
    NoMatchingRow,
}

impl WriteOutcome {
    fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            WriteOutcome::NoMatchingRow
        } else {
            WriteOutcome::Applied
        }
    }

    /// Whether a row was changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&input).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in insertion order.
    ///
    /// Returns an empty vector when the table has no rows.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                productName,
                quantity,
                CAST(price AS REAL) AS price,
                image
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::read)?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No row with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Fetching product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                productName,
                quantity,
                CAST(price AS REAL) AS price,
                image
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::read)?;

        Ok(product)
    }

    /// Inserts a new product and returns the id the store assigned.
    ///
    /// ## Returns
    /// * `Ok(i64)` - New row id
    /// * `Err(DbError::WriteFailed | ConstraintViolation | …)` - Statement
    ///   could not run
    pub async fn insert(&self, input: &ProductInput) -> DbResult<i64> {
        debug!(name = %input.product_name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (productName, quantity, price, image)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&input.product_name)
        .bind(input.quantity)
        .bind(input.price)
        .bind(input.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(DbError::write)?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Overwrites every mutable column of the product with this id.
    ///
    /// ## Returns
    /// * `Ok(WriteOutcome::Applied)` - Row updated
    /// * `Ok(WriteOutcome::NoMatchingRow)` - No row with this id
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<WriteOutcome> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                productName = ?2,
                quantity = ?3,
                price = ?4,
                image = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.product_name)
        .bind(input.quantity)
        .bind(input.price)
        .bind(input.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(DbError::write)?;

        let outcome = WriteOutcome::from_rows_affected(result.rows_affected());
        debug!(id, ?outcome, "Update finished");
        Ok(outcome)
    }

    /// Hard-deletes the product with this id.
    ///
    /// ## Returns
    /// * `Ok(WriteOutcome::Applied)` - Row removed
    /// * `Ok(WriteOutcome::NoMatchingRow)` - No row with this id
    pub async fn delete(&self, id: i64) -> DbResult<WriteOutcome> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::write)?;

        let outcome = WriteOutcome::from_rows_affected(result.rows_affected());
        debug!(id, ?outcome, "Delete finished");
        Ok(outcome)
    }

    /// Counts products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::read)?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError, WriteOutcome};
    use storekeeper_core::ProductInput;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn input(name: &str, quantity: i64, price: f64, image: Option<&str>) -> ProductInput {
        ProductInput {
            product_name: name.to_string(),
            quantity,
            price,
            image: image.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_returns_same_values() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo
            .insert(&input("Beans", 3, 12.5, Some("file:///photos/beans.jpg")))
            .await
            .unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.product_name, "Beans");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, 12.5);
        assert_eq!(product.image.as_deref(), Some("file:///photos/beans.jpg"));
    }

    #[tokio::test]
    async fn test_whole_and_zero_prices_read_back_as_decimals() {
        let db = test_db().await;
        let repo = db.products();

        let whole = repo.insert(&input("Rice", 10, 5000.0, None)).await.unwrap();
        let free = repo.insert(&input("Sample", 1, 0.0, None)).await.unwrap();

        assert_eq!(repo.get_by_id(whole).await.unwrap().unwrap().price, 5000.0);
        assert_eq!(repo.get_by_id(free).await.unwrap().unwrap().price, 0.0);
    }

    #[tokio::test]
    async fn test_get_missing_id_is_none() {
        let db = test_db().await;
        assert!(db.products().get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_grows_and_shrinks_by_one() {
        let db = test_db().await;
        let repo = db.products();

        assert!(repo.list_all().await.unwrap().is_empty());

        let first = repo.insert(&input("Rice", 10, 5000.0, None)).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        let second = repo.insert(&input("Garri", 4, 1500.0, None)).await.unwrap();
        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(
            all.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![first, second]
        );

        assert_eq!(repo.delete(first).await.unwrap(), WriteOutcome::Applied);
        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.iter().all(|p| p.id != first));
    }

    #[tokio::test]
    async fn test_update_overwrites_all_mutable_fields() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo
            .insert(&input("Rice", 10, 5000.0, Some("file:///rice.jpg")))
            .await
            .unwrap();

        let changed = input("Rice (50kg)", 8, 5200.75, None);
        assert_eq!(repo.update(id, &changed).await.unwrap(), WriteOutcome::Applied);

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.product_name, "Rice (50kg)");
        assert_eq!(product.quantity, 8);
        assert_eq!(product.price, 5200.75);
        assert!(product.image.is_none());

        // Same update again: same stored state
        assert_eq!(repo.update(id, &changed).await.unwrap(), WriteOutcome::Applied);
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap(), product);
    }

    #[tokio::test]
    async fn test_missing_id_writes_report_no_matching_row() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&input("Rice", 10, 5000.0, None)).await.unwrap();

        let outcome = repo.update(id + 1, &input("Ghost", 1, 1.0, None)).await.unwrap();
        assert_eq!(outcome, WriteOutcome::NoMatchingRow);
        assert!(!outcome.is_applied());

        assert_eq!(repo.delete(id + 1).await.unwrap(), WriteOutcome::NoMatchingRow);

        // The existing row is untouched
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().product_name, "Rice");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&input("Salt", 2, 300.0, None)).await.unwrap();
        assert_eq!(repo.delete(id).await.unwrap(), WriteOutcome::Applied);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let db = test_db().await;
        let repo = db.products();

        let first = repo.insert(&input("Salt", 2, 300.0, None)).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.insert(&input("Sugar", 2, 450.0, None)).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_insert_failure_is_a_write_error() {
        let db = test_db().await;
        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db
            .products()
            .insert(&input("Rice", 10, 5000.0, None))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::WriteFailed(_)));
        assert!(err.is_write_failure());
    }

    #[tokio::test]
    async fn test_store_rejects_rows_breaking_invariants() {
        let db = test_db().await;
        let repo = db.products();

        let bad = [
            input("", 10, 5000.0, None),
            input("   ", 10, 5000.0, None),
            input("Rice", 0, 5000.0, None),
            input("Rice", -2, 5000.0, None),
            input("Rice", 10, -5.0, None),
        ];

        for payload in &bad {
            let err = repo.insert(payload).await.unwrap_err();
            assert!(
                matches!(err, DbError::ConstraintViolation(_)),
                "{:?} gave {:?}",
                payload,
                err
            );
            assert!(err.is_write_failure());
        }

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_breaking_invariants_leaves_row() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&input("Rice", 10, 5000.0, None)).await.unwrap();

        let err = repo.update(id, &input("Rice", 0, 5000.0, None)).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));

        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn test_nan_price_is_a_constraint_violation() {
        let db = test_db().await;

        // NaN binds as NULL
        let err = db
            .products()
            .insert(&input("Rice", 10, f64::NAN, None))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_rice_scenario() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&input("Rice", 10, 5000.0, None)).await.unwrap();
        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(id, 1);

        repo.update(1, &input("Rice", 8, 5000.0, None)).await.unwrap();
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().quantity, 8);

        repo.delete(1).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
