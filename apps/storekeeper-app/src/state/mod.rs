//! # State Module
//!
//! Application state handed to the screen actions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      UI Host                                    │   │
//! │  │  let db = bootstrap(&config).await?;                            │   │
//! │  │  keeps db + config for the process lifetime                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   DbState    │  │ ProductForm  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Database    │  │  raw text    │  │  database_name   │              │
//! │  │  (SQLite     │  │  + image uri │  │  currency        │              │
//! │  │   pool)      │  │  per screen  │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • DbState: cheap to clone, shared by every screen                     │
//! │  • ProductForm: owned by one add/edit screen                           │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod form;

pub use config::ConfigState;
pub use db::DbState;
pub use form::ProductForm;
