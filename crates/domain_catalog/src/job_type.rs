//! The catalog entity and its input shapes
//!
//! A `JobType` is a reference record keyed by a generated identifier and a
//! unique human-readable code. The audit fields (`update_date`, `update_by`)
//! are refreshed on every write and never copied from a prior state.

use chrono::{DateTime, Utc};
use core_kernel::JobTypeId;
use serde::{Deserialize, Serialize};

/// A job type record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobType {
    /// Sequence-assigned identifier, immutable once assigned
    pub id: JobTypeId,
    /// Unique human-readable key, compared case-sensitively
    pub code: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Server-stamped timestamp of the last write
    pub update_date: DateTime<Utc>,
    /// User recorded on the last write
    pub update_by: String,
}

/// Input for creating a new job type
///
/// The identifier and timestamp are assigned by the persistence layer, never
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct JobTypeDraft {
    pub code: String,
    pub description: Option<String>,
    pub update_by: String,
}

impl JobTypeDraft {
    pub fn new(code: impl Into<String>, update_by: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            update_by: update_by.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Input for updating an existing job type
///
/// All fields are written unconditionally; the audit fields are restamped
/// even when code and description are unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct JobTypeUpdate {
    pub code: String,
    pub description: Option<String>,
    pub update_by: String,
}

impl JobTypeUpdate {
    pub fn new(code: impl Into<String>, update_by: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            update_by: update_by.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_builder() {
        let draft = JobTypeDraft::new("FULL_TIME", "admin")
            .with_description("Full-time employment");

        assert_eq!(draft.code, "FULL_TIME");
        assert_eq!(draft.description.as_deref(), Some("Full-time employment"));
        assert_eq!(draft.update_by, "admin");
    }

    #[test]
    fn test_update_defaults_to_no_description() {
        let update = JobTypeUpdate::new("PART_TIME", "hr");
        assert!(update.description.is_none());
    }
}
