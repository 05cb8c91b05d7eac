//! Repository implementations
//!
//! Two adapters for the same domain ports: the call-style repository works
//! through named stored routines, the mapped repository issues direct SQL.
//! Both resolve every failure to one of the three `CatalogError` kinds.

pub mod mapped;
pub mod procedural;

pub use mapped::MappedJobTypeRepository;
pub use procedural::ProceduralJobTypeRepository;

use chrono::{DateTime, Utc};
use domain_catalog::JobType;

/// Database row representation of a catalog record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobTypeRow {
    pub job_type_id: i64,
    pub code: String,
    pub description: Option<String>,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl From<JobTypeRow> for JobType {
    fn from(row: JobTypeRow) -> Self {
        JobType {
            id: row.job_type_id.into(),
            code: row.code,
            description: row.description,
            update_date: row.update_date,
            update_by: row.update_by,
        }
    }
}
