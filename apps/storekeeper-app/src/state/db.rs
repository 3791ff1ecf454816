//! # Database State
//!
//! Wraps the `Database` handle for use in screen actions.
//!
//! ## Usage in Screens
//! ```rust,ignore
//! pub async fn load_products(db: &DbState, config: &ConfigState) -> Result<Vec<ProductDto>, ApiError> {
//!     let products = db.inner().products().list_all().await?;
//!     Ok(products.into_iter().map(|p| ProductDto::new(p, config)).collect())
//! }
//! ```

use storekeeper_db::Database;

/// The store handle every screen shares.
///
/// Passed explicitly; tests build one over an in-memory database.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database handle.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
