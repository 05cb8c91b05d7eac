//! Database error types
//!
//! Classifies low-level SQLx failures into variants the repositories can
//! pattern-match: uniqueness violations, the routines' not-found signal, and
//! connectivity problems. Repositories translate these, with operation
//! context, into the outward `CatalogError` taxonomy - nothing below this
//! module crosses the service façade.

use thiserror::Error;

/// SQLSTATE raised by the catalog routines when the target id does not exist
pub const SQLSTATE_ROUTINE_NOT_FOUND: &str = "JT404";

/// PostgreSQL unique constraint violation
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL foreign key violation
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL check constraint violation
const SQLSTATE_CHECK_VIOLATION: &str = "23514";

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query or routine execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Row not found, or a routine raised its not-found signal
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Other constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a uniqueness violation
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DatabaseError::DuplicateEntry(_))
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Classifies SQLx errors by inspecting the SQLSTATE code
///
/// PostgreSQL error codes:
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        SQLSTATE_UNIQUE_VIOLATION => {
                            DatabaseError::DuplicateEntry(db_err.message().to_string())
                        }
                        SQLSTATE_ROUTINE_NOT_FOUND => {
                            DatabaseError::NotFound(db_err.message().to_string())
                        }
                        SQLSTATE_FOREIGN_KEY_VIOLATION | SQLSTATE_CHECK_VIOLATION => {
                            DatabaseError::ConstraintViolation(db_err.message().to_string())
                        }
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_classification() {
        let error = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
        assert!(!error.is_duplicate());
    }

    #[test]
    fn test_pool_timeout_classification() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(error.is_connection_error());
    }

    #[test]
    fn test_duplicate_predicate() {
        let error = DatabaseError::DuplicateEntry("code already taken".to_string());
        assert!(error.is_duplicate());
        assert!(error.to_string().contains("code already taken"));
    }
}
