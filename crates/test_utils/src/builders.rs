//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and rely on defaults for the rest.

use chrono::{DateTime, Utc};
use core_kernel::JobTypeId;
use domain_catalog::JobType;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test catalog records
pub struct JobTypeBuilder {
    id: JobTypeId,
    code: String,
    description: Option<String>,
    update_date: DateTime<Utc>,
    update_by: String,
}

impl Default for JobTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTypeBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: JobTypeId::new(1),
            code: "FULL_TIME".to_string(),
            description: Some("Full-time employment".to_string()),
            update_date: TemporalFixtures::stamp(),
            update_by: "admin".to_string(),
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = JobTypeId::new(id);
        self
    }

    /// Sets the code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Sets the audit timestamp
    pub fn with_update_date(mut self, update_date: DateTime<Utc>) -> Self {
        self.update_date = update_date;
        self
    }

    /// Sets the audit user
    pub fn with_update_by(mut self, update_by: impl Into<String>) -> Self {
        self.update_by = update_by.into();
        self
    }

    /// Builds the test record
    pub fn build(self) -> JobType {
        JobType {
            id: self.id,
            code: self.code,
            description: self.description,
            update_date: self.update_date,
            update_by: self.update_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let record = JobTypeBuilder::new().build();
        assert_eq!(record.code, "FULL_TIME");
        assert_eq!(record.update_by, "admin");
    }

    #[test]
    fn test_builder_overrides() {
        let record = JobTypeBuilder::new()
            .with_id(7)
            .with_code("SEASONAL")
            .without_description()
            .with_update_by("hr")
            .build();

        assert_eq!(record.id, JobTypeId::new(7));
        assert_eq!(record.code, "SEASONAL");
        assert!(record.description.is_none());
        assert_eq!(record.update_by, "hr");
    }
}
