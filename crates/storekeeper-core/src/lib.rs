//! # storekeeper-core: Pure Business Logic for StoreKeeper
//!
//! Product types and the form validation rules that run before anything
//! touches the store. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StoreKeeper Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Host (list / add / edit)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storekeeper-app (screens)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storekeeper-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │     types     │  │  validation   │  │     error     │      │   │
//! │  │   │   Product     │  │  name / qty   │  │  Validation   │      │   │
//! │  │   │ ProductInput  │  │  / price      │  │  CoreError    │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storekeeper-db (Database Layer)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductInput, ImageSelection)
//! - [`error`] - Domain error types
//! - [`validation`] - Form validation (name → quantity → price)
//!
//! ## Example Usage
//!
//! ```rust
//! use storekeeper_core::validation::validate_product_form;
//!
//! let fields = validate_product_form("Rice", "10", "5000").unwrap();
//! assert_eq!(fields.quantity, 10);
//!
//! let input = fields.with_image(None);
//! assert!(input.image.is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// File name of the on-device store.
pub const DATABASE_FILE_NAME: &str = "storeKeeper.db";

/// Smallest quantity a product row may hold.
pub const MIN_QUANTITY: i64 = 1;
