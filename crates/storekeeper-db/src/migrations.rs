//! # Database Migrations
//!
//! Embedded SQL migrations: the schema initializer.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (create if missing)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Compare embedded migrations vs applied                                │
//! │       │                                                                 │
//! │       ├── 001_create_products.sql  ⬜ → run on first launch            │
//! │       └── 002_products_checks.sql  ⬜ → row CHECK constraints           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Schema changes that SQLite cannot apply in place (constraints) rebuild
//!    the table and copy the rows across
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Embedded migrations from the `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Idempotent: safe to run on every app start.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)` for diagnostics.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .map_err(DbError::read)?;

    Ok((total, applied as usize))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn bare_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_after_run() {
        let pool = bare_pool().await;
        run_migrations(&pool).await.unwrap();

        let (total, applied) = migration_status(&pool).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(applied, total);
    }

    #[tokio::test]
    async fn test_status_before_run_is_an_error() {
        let pool = bare_pool().await;

        assert!(matches!(
            migration_status(&pool).await,
            Err(DbError::ReadFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_rebuild_keeps_rows_and_retired_ids() {
        let pool = bare_pool().await;

        // Store created before the CHECK constraints existed
        sqlx::query(include_str!("../../../migrations/sqlite/001_create_products.sql"))
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO products (productName, quantity, price) VALUES ('Rice', 10, 5000), ('Garri', 4, 1500)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("DELETE FROM products WHERE productName = 'Garri'")
            .execute(&pool)
            .await
            .unwrap();

        run_migrations(&pool).await.unwrap();

        let names: Vec<String> = sqlx::query_scalar("SELECT productName FROM products ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(names, vec!["Rice".to_string()]);

        let result = sqlx::query("INSERT INTO products (productName, quantity, price) VALUES ('Salt', 1, 300)")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(result.last_insert_rowid(), 3);
    }
}
