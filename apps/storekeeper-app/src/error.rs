//! # API Error Type
//!
//! Unified error type for screen actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in StoreKeeper                            │
//! │                                                                         │
//! │  Screen action (submit / open / delete)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation Error? ─── ValidationError::InvalidPrice ──┐               │
//! │         │                                              │               │
//! │         ▼                                              ▼               │
//! │  Not Found? ───────── CoreError::ProductNotFound ──── ApiError         │
//! │         │                                              ▲               │
//! │         ▼                                              │               │
//! │  Database Error? ──── DbError::WriteFailed("...") ─────┘               │
//! │                        (details logged, generic message kept)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Notice { kind: error, title: "Error", message }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host receives both a machine-readable `code` and the message to show.

use serde::Serialize;
use storekeeper_core::{CoreError, ValidationError};
use storekeeper_db::DbError;
use thiserror::Error;

/// Error returned from screen actions.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id has no row
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Store operation failed
    DatabaseError,

    /// Startup or platform failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found", resource))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::ReadFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Store read failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Failed to load products")
            }
            DbError::WriteFailed(e) => {
                tracing::error!("Store write failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "An error occurred")
            }
            DbError::ConstraintViolation(e) => {
                tracing::error!("Constraint violation: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "An error occurred")
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::new(ErrorCode::DatabaseError, "Database is busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => {
                tracing::debug!(id, "Product not found");
                ApiError::not_found("Product")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

/// Converts form validation failures to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.user_message())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
