//! The outward error taxonomy
//!
//! Every repository operation resolves to exactly one of three kinds:
//! `NotFound`, `Conflict`, or `ServiceFailure`. Nothing below the repository
//! boundary (driver errors, SQLSTATE codes, pool failures) crosses the
//! service façade unclassified.

use std::fmt;
use thiserror::Error;

/// The three outward-facing failure kinds of the catalog
///
/// `ServiceFailure` carries the original cause as a message string for
/// diagnostics; it never carries a raw driver error object.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested id or code does not exist
    #[error("{entity} with {key} not found")]
    NotFound {
        entity: String,
        key: String,
    },

    /// A duplicate code on insert or update
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Any other storage or connectivity problem
    #[error("Service failure: {message}")]
    ServiceFailure {
        message: String,
    },
}

impl CatalogError {
    /// Creates a NotFound error for an entity and the key that missed
    pub fn not_found(entity: impl Into<String>, key: impl fmt::Display) -> Self {
        CatalogError::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        CatalogError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a ServiceFailure carrying the original cause message
    pub fn failure(message: impl Into<String>) -> Self {
        CatalogError::ServiceFailure {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }

    /// Returns true if this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, CatalogError::Conflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = CatalogError::not_found("Job type", "id 42");
        assert!(error.is_not_found());
        assert!(!error.is_conflict());
        assert_eq!(error.to_string(), "Job type with id 42 not found");
    }

    #[test]
    fn test_conflict_message() {
        let error = CatalogError::conflict("code 'FULL_TIME' already exists");
        assert!(error.is_conflict());
        assert!(error.to_string().contains("FULL_TIME"));
    }

    #[test]
    fn test_failure_carries_cause() {
        let error = CatalogError::failure("connection reset by peer");
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("connection reset"));
    }
}
