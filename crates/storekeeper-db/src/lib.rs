//! # storekeeper-db: Database Layer for StoreKeeper
//!
//! Database access for the StoreKeeper app: one SQLite file, one
//! `products` table, WAL mode.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StoreKeeper Data Flow                            │
//! │                                                                         │
//! │  Screen (add_product.submit)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storekeeper-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │◄───│ ProductRepo   │    │ 001_create_  │  │   │
//! │  │   │ SqlitePool    │    │               │    │ products.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              SQLite Database (storeKeeper.db)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection handle creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storekeeper_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/storeKeeper.db")).await?;
//!
//! let id = db.products().insert(&input).await?;
//! let all = db.products().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::{ProductRepository, WriteOutcome};
