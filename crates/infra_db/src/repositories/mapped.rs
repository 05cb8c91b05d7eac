//! Mapped repository
//!
//! Issues its own SQL directly against the catalog table and provides the
//! derived query operations. Uniqueness is enforced by an explicit pre-check
//! before every write; the unique index on `code` remains the backstop under
//! concurrent writers, and a violation raised through it also maps to
//! Conflict. The check-then-write window is an accepted race - the index,
//! not the pre-check, is the guarantee.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{CatalogError, JobTypeId};
use domain_catalog::{JobType, JobTypeDraft, JobTypeQueries, JobTypeStore, JobTypeUpdate};
use sqlx::PgPool;

use crate::error::DatabaseError;
use crate::gateway::{Params, SqlGateway};
use crate::repositories::JobTypeRow;
use crate::sequence::IdSequence;

const SELECT_SQL: &str =
    "SELECT job_type_id, code, description, update_date, update_by FROM job_types";

const INSERT_SQL: &str = "INSERT INTO job_types (job_type_id, code, description, update_date, update_by) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING job_type_id, code, description, update_date, update_by";

const UPDATE_SQL: &str = "UPDATE job_types SET code = $2, description = $3, update_date = $4, update_by = $5 \
     WHERE job_type_id = $1 \
     RETURNING job_type_id, code, description, update_date, update_by";

/// Repository mapping catalog operations onto direct statements
#[derive(Debug, Clone)]
pub struct MappedJobTypeRepository {
    gateway: SqlGateway,
    sequence: IdSequence,
}

impl MappedJobTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        let gateway = SqlGateway::new(pool);
        let sequence = IdSequence::new(gateway.clone());
        Self { gateway, sequence }
    }

    fn conflict_on_code(code: &str) -> CatalogError {
        CatalogError::conflict(format!("job type with code '{}' already exists", code))
    }

    async fn code_taken(&self, code: &str) -> Result<bool, CatalogError> {
        self.gateway
            .fetch_scalar(
                "SELECT EXISTS(SELECT 1 FROM job_types WHERE code = $1)",
                Params::new().add(code),
            )
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to check code uniqueness: {}", e)))
    }

    async fn fetch_by_id(&self, id: JobTypeId) -> Result<Option<JobTypeRow>, CatalogError> {
        self.gateway
            .fetch_optional(
                "SELECT job_type_id, code, description, update_date, update_by \
                 FROM job_types WHERE job_type_id = $1",
                Params::new().add(id.value()),
            )
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to retrieve job type: {}", e)))
    }

    async fn list_rows(&self, sql: &str, params: Params) -> Result<Vec<JobType>, CatalogError> {
        let rows: Vec<JobTypeRow> = self
            .gateway
            .fetch_all(sql, params)
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to retrieve job types: {}", e)))?;
        Ok(rows.into_iter().map(JobType::from).collect())
    }
}

#[async_trait]
impl JobTypeStore for MappedJobTypeRepository {
    async fn insert(&self, draft: JobTypeDraft) -> Result<JobType, CatalogError> {
        // Pre-check so a duplicate fails before touching storage
        if self.code_taken(&draft.code).await? {
            return Err(Self::conflict_on_code(&draft.code));
        }

        let id = self
            .sequence
            .next()
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to allocate job type id: {}", e)))?;
        let now = Utc::now();

        let row: JobTypeRow = self
            .gateway
            .call_one(
                INSERT_SQL,
                Params::new()
                    .add(id.value())
                    .add(&draft.code)
                    .add(&draft.description)
                    .add(now)
                    .add(&draft.update_by),
            )
            .await
            .map_err(|e| match e {
                // Unique index backstop when two writers pass the pre-check
                DatabaseError::DuplicateEntry(_) => Self::conflict_on_code(&draft.code),
                other => CatalogError::failure(format!("Failed to insert job type: {}", other)),
            })?;

        Ok(row.into())
    }

    async fn update(&self, id: JobTypeId, update: JobTypeUpdate) -> Result<JobType, CatalogError> {
        let existing = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Job type", format!("id {}", id)))?;

        if existing.code != update.code && self.code_taken(&update.code).await? {
            return Err(Self::conflict_on_code(&update.code));
        }

        let now = Utc::now();
        let row: JobTypeRow = self
            .gateway
            .call_one(
                UPDATE_SQL,
                Params::new()
                    .add(id.value())
                    .add(&update.code)
                    .add(&update.description)
                    .add(now)
                    .add(&update.update_by),
            )
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateEntry(_) => Self::conflict_on_code(&update.code),
                other => CatalogError::failure(format!("Failed to update job type: {}", other)),
            })?;

        Ok(row.into())
    }

    async fn get(&self, id: JobTypeId) -> Result<JobType, CatalogError> {
        self.fetch_by_id(id)
            .await?
            .map(JobType::from)
            .ok_or_else(|| CatalogError::not_found("Job type", format!("id {}", id)))
    }

    async fn get_by_code(&self, code: &str) -> Result<JobType, CatalogError> {
        let row: Option<JobTypeRow> = self
            .gateway
            .fetch_optional(
                "SELECT job_type_id, code, description, update_date, update_by \
                 FROM job_types WHERE code = $1",
                Params::new().add(code),
            )
            .await
            .map_err(|e| {
                CatalogError::failure(format!("Failed to retrieve job type by code: {}", e))
            })?;

        row.map(JobType::from)
            .ok_or_else(|| CatalogError::not_found("Job type", format!("code '{}'", code)))
    }

    async fn delete(&self, id: JobTypeId) -> Result<(), CatalogError> {
        let affected = self
            .gateway
            .execute(
                "DELETE FROM job_types WHERE job_type_id = $1",
                Params::new().add(id.value()),
            )
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to delete job type: {}", e)))?;

        if affected == 0 {
            return Err(CatalogError::not_found("Job type", format!("id {}", id)));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} ORDER BY job_type_id");
        self.list_rows(&sql, Params::new()).await
    }
}

#[async_trait]
impl JobTypeQueries for MappedJobTypeRepository {
    async fn list_ordered_by_update_date_desc(&self) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} ORDER BY update_date DESC");
        self.list_rows(&sql, Params::new()).await
    }

    async fn list_ordered_by_code_asc(&self) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} ORDER BY code ASC");
        self.list_rows(&sql, Params::new()).await
    }

    async fn search_by_description(&self, fragment: &str) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} WHERE lower(description) LIKE '%' || lower($1) || '%'");
        self.list_rows(&sql, Params::new().add(fragment)).await
    }

    async fn list_by_update_by(&self, update_by: &str) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} WHERE update_by = $1");
        self.list_rows(&sql, Params::new().add(update_by)).await
    }

    async fn list_updated_after(
        &self,
        after: DateTime<Utc>,
    ) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} WHERE update_date > $1");
        self.list_rows(&sql, Params::new().add(after)).await
    }

    async fn list_updated_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<JobType>, CatalogError> {
        let sql = format!("{SELECT_SQL} WHERE update_date BETWEEN $1 AND $2");
        self.list_rows(&sql, Params::new().add(start).add(end)).await
    }

    async fn exists_by_id(&self, id: JobTypeId) -> Result<bool, CatalogError> {
        self.gateway
            .fetch_scalar(
                "SELECT EXISTS(SELECT 1 FROM job_types WHERE job_type_id = $1)",
                Params::new().add(id.value()),
            )
            .await
            .map_err(|e| {
                CatalogError::failure(format!("Failed to check job type existence: {}", e))
            })
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, CatalogError> {
        self.code_taken(code).await
    }

    async fn count_by_update_by(&self, update_by: &str) -> Result<i64, CatalogError> {
        self.gateway
            .fetch_scalar(
                "SELECT COUNT(*) FROM job_types WHERE update_by = $1",
                Params::new().add(update_by),
            )
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to count job types: {}", e)))
    }

    async fn total_count(&self) -> Result<i64, CatalogError> {
        self.gateway
            .fetch_scalar("SELECT COUNT(*) FROM job_types", Params::new())
            .await
            .map_err(|e| CatalogError::failure(format!("Failed to count job types: {}", e)))
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), CatalogError> {
        let affected = self
            .gateway
            .execute(
                "DELETE FROM job_types WHERE code = $1",
                Params::new().add(code),
            )
            .await
            .map_err(|e| {
                CatalogError::failure(format!("Failed to delete job type by code: {}", e))
            })?;

        if affected == 0 {
            return Err(CatalogError::not_found(
                "Job type",
                format!("code '{}'", code),
            ));
        }
        Ok(())
    }
}
