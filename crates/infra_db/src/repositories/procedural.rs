//! Call-style repository
//!
//! Operates purely through the named stored routines (`insert_job_type`,
//! `update_job_type`, `view_job_type`, `delete_job_type`,
//! `get_all_job_types`, `get_job_type_by_code`). The routines own the write
//! semantics; this adapter decodes their output and translates their
//! signals:
//!
//! - SQLSTATE `JT404` from update/delete means the id does not exist
//! - a NULL `code` from `view_job_type` means no such id
//! - a NULL or zero id from `get_job_type_by_code` means no such code
//! - SQLSTATE 23505 from the unique index means a duplicate code
//!
//! Insert and update re-fetch the record by id afterwards so the returned
//! record carries the routine-stamped timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{CatalogError, JobTypeId};
use domain_catalog::{JobType, JobTypeDraft, JobTypeStore, JobTypeUpdate};
use sqlx::PgPool;

use crate::error::DatabaseError;
use crate::gateway::{Params, SqlGateway};
use crate::repositories::JobTypeRow;
use crate::sequence::IdSequence;

const INSERT_SQL: &str = "SELECT insert_job_type($1, $2, $3, $4)";
const UPDATE_SQL: &str = "SELECT update_job_type($1, $2, $3, $4)";
const VIEW_SQL: &str = "SELECT * FROM view_job_type($1)";
const BY_CODE_SQL: &str = "SELECT * FROM get_job_type_by_code($1)";
const DELETE_SQL: &str = "SELECT delete_job_type($1)";
const LIST_SQL: &str = "SELECT * FROM get_all_job_types()";

/// Output of `view_job_type`; every column is nullable because a missing id
/// yields a row of NULLs with the code as the signal
#[derive(Debug, sqlx::FromRow)]
struct ViewRow {
    code: Option<String>,
    description: Option<String>,
    update_date: Option<DateTime<Utc>>,
    update_by: Option<String>,
}

/// Output of `get_job_type_by_code`; a NULL or zero id is the signal
#[derive(Debug, sqlx::FromRow)]
struct CodeLookupRow {
    job_type_id: Option<i64>,
    description: Option<String>,
    update_date: Option<DateTime<Utc>>,
    update_by: Option<String>,
}

/// Repository delegating all catalog operations to stored routines
#[derive(Debug, Clone)]
pub struct ProceduralJobTypeRepository {
    gateway: SqlGateway,
    sequence: IdSequence,
}

impl ProceduralJobTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        let gateway = SqlGateway::new(pool);
        let sequence = IdSequence::new(gateway.clone());
        Self { gateway, sequence }
    }

    fn not_found_by_id(id: JobTypeId) -> CatalogError {
        CatalogError::not_found("Job type", format!("id {}", id))
    }
}

#[async_trait]
impl JobTypeStore for ProceduralJobTypeRepository {
    async fn insert(&self, draft: JobTypeDraft) -> Result<JobType, CatalogError> {
        let id = self
            .sequence
            .next()
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to allocate job type id: {}", e)))?;

        self.gateway
            .execute(
                INSERT_SQL,
                Params::new()
                    .add(id.value())
                    .add(&draft.code)
                    .add(&draft.description)
                    .add(&draft.update_by),
            )
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateEntry(_) => CatalogError::conflict(format!(
                    "job type with code '{}' already exists",
                    draft.code
                )),
                other => CatalogError::failure(format!("Failed to insert job type: {}", other)),
            })?;

        // Re-fetch to recover the routine-stamped timestamp
        self.get(id).await
    }

    async fn update(&self, id: JobTypeId, update: JobTypeUpdate) -> Result<JobType, CatalogError> {
        self.gateway
            .execute(
                UPDATE_SQL,
                Params::new()
                    .add(id.value())
                    .add(&update.code)
                    .add(&update.description)
                    .add(&update.update_by),
            )
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => Self::not_found_by_id(id),
                DatabaseError::DuplicateEntry(_) => CatalogError::conflict(format!(
                    "job type with code '{}' already exists",
                    update.code
                )),
                other => CatalogError::failure(format!("Failed to update job type: {}", other)),
            })?;

        self.get(id).await
    }

    async fn get(&self, id: JobTypeId) -> Result<JobType, CatalogError> {
        let row: ViewRow = self
            .gateway
            .call_one(VIEW_SQL, Params::new().add(id.value()))
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to retrieve job type: {}", e)))?;

        let code = row.code.ok_or_else(|| Self::not_found_by_id(id))?;
        let update_date = row.update_date.ok_or_else(|| {
            CatalogError::failure("view_job_type returned a row without update_date")
        })?;
        let update_by = row.update_by.ok_or_else(|| {
            CatalogError::failure("view_job_type returned a row without update_by")
        })?;

        Ok(JobType {
            id,
            code,
            description: row.description,
            update_date,
            update_by,
        })
    }

    async fn get_by_code(&self, code: &str) -> Result<JobType, CatalogError> {
        let row: CodeLookupRow = self
            .gateway
            .call_one(BY_CODE_SQL, Params::new().add(code))
            .await
            .map_err(|e| {
                CatalogError::failure(format!("Failed to retrieve job type by code: {}", e))
            })?;

        let id = match row.job_type_id {
            Some(id) if id != 0 => JobTypeId::new(id),
            _ => {
                return Err(CatalogError::not_found(
                    "Job type",
                    format!("code '{}'", code),
                ))
            }
        };
        let update_date = row.update_date.ok_or_else(|| {
            CatalogError::failure("get_job_type_by_code returned a row without update_date")
        })?;
        let update_by = row.update_by.ok_or_else(|| {
            CatalogError::failure("get_job_type_by_code returned a row without update_by")
        })?;

        Ok(JobType {
            id,
            code: code.to_string(),
            description: row.description,
            update_date,
            update_by,
        })
    }

    async fn delete(&self, id: JobTypeId) -> Result<(), CatalogError> {
        self.gateway
            .execute(DELETE_SQL, Params::new().add(id.value()))
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => Self::not_found_by_id(id),
                other => CatalogError::failure(format!("Failed to delete job type: {}", other)),
            })?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<JobType>, CatalogError> {
        let rows: Vec<JobTypeRow> = self
            .gateway
            .fetch_all(LIST_SQL, Params::new())
            .await
            .map_err(|e| {
                CatalogError::failure(format!("Failed to retrieve all job types: {}", e))
            })?;

        Ok(rows.into_iter().map(JobType::from).collect())
    }
}
