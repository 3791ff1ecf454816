//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← read or write, constraint, pool               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← generic message, details logged                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Screen shows "Error" notice                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Store file could not be opened, or the pool is closed.
    ///
    /// ## When This Occurs
    /// - Directory doesn't exist or isn't writable
    /// - Disk full
    /// - `Database::close` was called earlier
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema initialization failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A select statement could not complete.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// An insert, update or delete could not complete.
    ///
    /// ## When This Occurs
    /// - Store locked by another writer past the busy timeout
    /// - Table missing or I/O error
    #[error("Store write failed: {0}")]
    WriteFailed(String),

    /// A NOT NULL, UNIQUE, CHECK or foreign key constraint rejected a write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Timed out waiting for the connection.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Classifies an error raised by a select statement.
    pub fn read(err: sqlx::Error) -> Self {
        classify(err, DbError::ReadFailed)
    }

    /// Classifies an error raised by an insert, update or delete.
    pub fn write(err: sqlx::Error) -> Self {
        classify(err, DbError::WriteFailed)
    }

    /// Whether this is a failed write (as opposed to a read or setup error).
    pub fn is_write_failure(&self) -> bool {
        matches!(
            self,
            DbError::WriteFailed(_) | DbError::ConstraintViolation(_)
        )
    }
}

/// Maps sqlx errors onto the store taxonomy.
///
/// ```text
/// sqlx::Error::Database (constraint) → DbError::ConstraintViolation
/// sqlx::Error::Database (other)      → fallback (ReadFailed / WriteFailed)
/// sqlx::Error::PoolTimedOut          → DbError::PoolExhausted
/// sqlx::Error::PoolClosed            → DbError::ConnectionFailed
/// sqlx::Error::Io                    → fallback
/// Other                              → DbError::Internal
/// ```
fn classify(err: sqlx::Error, fallback: fn(String) -> DbError) -> DbError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => DbError::ConstraintViolation(db_err.message().to_string()),
            _ => fallback(db_err.message().to_string()),
        },

        sqlx::Error::Io(io_err) => fallback(io_err.to_string()),

        sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

        sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

        _ => DbError::Internal(err.to_string()),
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        classify(err, DbError::Internal)
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
