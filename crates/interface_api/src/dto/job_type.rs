//! Job type DTOs
//!
//! Field limits mirror the catalog columns: code and update_by are required
//! and at most 128 characters, the description is optional up to 512.

use chrono::{DateTime, Utc};
use core_kernel::JobTypeId;
use domain_catalog::{JobType, JobTypeDraft, JobTypeUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct JobTypeRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub code: String,
    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub update_by: String,
}

impl JobTypeRequest {
    pub fn into_draft(self) -> JobTypeDraft {
        JobTypeDraft {
            code: self.code,
            description: self.description,
            update_by: self.update_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobTypeRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub code: String,
    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub update_by: String,
}

impl UpdateJobTypeRequest {
    pub fn into_update(self) -> JobTypeUpdate {
        JobTypeUpdate {
            code: self.code,
            description: self.description,
            update_by: self.update_by,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobTypeResponse {
    pub id: JobTypeId,
    pub code: String,
    pub description: Option<String>,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl From<JobType> for JobTypeResponse {
    fn from(record: JobType) -> Self {
        Self {
            id: record.id,
            code: record.code,
            description: record.description,
            update_date: record.update_date,
            update_by: record.update_by,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionSearchParams {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedAfterParams {
    pub after: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedBetweenParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
