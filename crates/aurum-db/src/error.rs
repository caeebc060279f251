//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  sqlite error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller maps to its surface (404/400/500-equivalents)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use aurum_core::ValidationError;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found: unknown id, or an update/delete affected zero rows.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation. The duplicate-invoice-number case
    /// surfaces here when number regeneration has already been retried.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Rejected input; no transaction was opened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A failure inside the invoice creation transaction. Everything was
    /// rolled back; `source` is the write that failed.
    #[error("Invoice creation failed: {source}")]
    InvoiceCreation {
        #[source]
        source: Box<DbError>,
    },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed (runtime SQL error).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Wraps a mid-transaction failure after rollback.
    pub fn invoice_creation(source: DbError) -> Self {
        DbError::InvoiceCreation {
            source: Box::new(source),
        }
    }

    /// Whether this is a unique violation on the invoice number, the one
    /// case where the engine retries number generation.
    pub fn is_invoice_number_collision(&self) -> bool {
        matches!(
            self,
            DbError::UniqueViolation { field, .. } if field.contains("invoice_number")
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound  → DbError::NotFound
/// sqlx::Error::Database     → classify by constraint message
/// sqlx::Error::PoolTimedOut → DbError::PoolExhausted
/// Other                     → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                //   "UNIQUE constraint failed: <table>.<column>"
                //   "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Invoice", 42);
        assert_eq!(err.to_string(), "Invoice not found: 42");
    }

    #[test]
    fn test_invoice_number_collision_detection() {
        let err = DbError::UniqueViolation {
            field: "invoices.invoice_number".to_string(),
            value: "unknown".to_string(),
        };
        assert!(err.is_invoice_number_collision());

        let other = DbError::UniqueViolation {
            field: "products.name".to_string(),
            value: "unknown".to_string(),
        };
        assert!(!other.is_invoice_number_collision());
    }

    #[test]
    fn test_invoice_creation_carries_cause() {
        let err = DbError::invoice_creation(DbError::not_found("Product", 9));
        assert!(err.to_string().contains("Product not found: 9"));
    }
}
