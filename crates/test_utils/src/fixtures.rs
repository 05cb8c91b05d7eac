//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for catalog records. These fixtures are
//! deterministic so assertions stay predictable across runs.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::JobTypeId;
use domain_catalog::{JobType, JobTypeDraft};

/// Fixture for catalog record test data
pub struct JobTypeFixtures;

impl JobTypeFixtures {
    /// A fully populated record as the persistence layer would return it
    pub fn full_time() -> JobType {
        JobType {
            id: JobTypeId::new(1),
            code: "FULL_TIME".to_string(),
            description: Some("Full-time employment".to_string()),
            update_date: TemporalFixtures::stamp(),
            update_by: "admin".to_string(),
        }
    }

    /// A record without a description
    pub fn contractor() -> JobType {
        JobType {
            id: JobTypeId::new(2),
            code: "CONTRACT".to_string(),
            description: None,
            update_date: TemporalFixtures::stamp(),
            update_by: "admin".to_string(),
        }
    }

    /// Draft for the standard full-time record
    pub fn full_time_draft() -> JobTypeDraft {
        JobTypeDraft::new("FULL_TIME", "admin").with_description("Full-time employment")
    }

    /// Draft for a part-time record
    pub fn part_time_draft() -> JobTypeDraft {
        JobTypeDraft::new("PART_TIME", "admin").with_description("Part-time employment")
    }

    /// A set of drafts whose codes are deliberately unsorted
    pub fn unsorted_drafts() -> Vec<JobTypeDraft> {
        ["CONTRACT", "APPRENTICE", "FULL_TIME", "BOARD"]
            .into_iter()
            .map(|code| JobTypeDraft::new(code, "admin"))
            .collect()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard audit stamp (Jan 15, 2024)
    pub fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    /// A timestamp before the standard stamp
    pub fn before_stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// A timestamp after the standard stamp
    pub fn after_stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }
}
