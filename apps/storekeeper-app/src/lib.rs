//! # StoreKeeper App Library
//!
//! Glue between the UI host and the StoreKeeper crates: startup, shared
//! state and the list / add / edit screen actions.
//!
//! ## Module Organization
//! ```text
//! storekeeper_app/
//! ├── lib.rs          ◄─── You are here (tracing, paths, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── form.rs     ◄─── Raw product form
//! │   └── config.rs   ◄─── Configuration state
//! ├── screens/
//! │   ├── mod.rs      ◄─── Notice, Route, Outcome
//! │   ├── list.rs     ◄─── Product list + delete
//! │   ├── add.rs      ◄─── Add product
//! │   └── edit.rs     ◄─── Edit product
//! └── error.rs        ◄─── API error type for screen actions
//! ```
//!
//! ## Host Usage
//! ```rust,ignore
//! storekeeper_app::init_tracing();
//!
//! let config = ConfigState::default();
//! let db = storekeeper_app::bootstrap(&config).await?;
//!
//! let products = load_products(&db, &config).await?;
//! ```

pub mod error;
pub mod screens;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{ConfigState, DbState};
use storekeeper_db::{Database, DbConfig};

/// Opens the store and returns the shared database state.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Determine Database Path ──────────────────────────────────────────► │
/// │     • config.data_dir if set                                            │
/// │     • else the platform data directory                                  │
/// │                                                                         │
/// │  2. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Create the products table if missing                              │
/// │                                                                         │
/// │  3. Wrap in DbState ──────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// An error here is fatal: the host cannot show any screen without a store.
pub async fn bootstrap(config: &ConfigState) -> Result<DbState, ApiError> {
    let db_path = database_path(config)?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and schema ready");

    Ok(DbState::new(db))
}

/// Installs the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storekeeper=trace` - Show trace for storekeeper crates only
/// - Default: INFO, DEBUG for storekeeper crates
///
/// Calling it again (or after the host installed a subscriber) does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storekeeper=debug,sqlx=warn"));

    // Err only means a global subscriber is already set
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Determines the database file path, creating its directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.storekeeper.app/storeKeeper.db`
/// - **Windows**: `%APPDATA%\storekeeper\app\data\storeKeeper.db`
/// - **Linux**: `~/.local/share/app/storeKeeper.db`
///
/// `config.data_dir` overrides the platform directory.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, ApiError> {
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "storekeeper", "app")
            .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?
            .data_dir()
            .to_path_buf(),
    };

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        tracing::error!(dir = %data_dir.display(), "Could not create data directory: {}", e);
        ApiError::internal("Could not create app data directory")
    })?;

    Ok(data_dir.join(&config.database_name))
}
