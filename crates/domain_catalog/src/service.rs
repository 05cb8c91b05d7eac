//! The catalog service façade
//!
//! The single entry point the HTTP layer consumes. One instance exists per
//! repository style; the service delegates to its store without duplicating
//! any invariant the store already guarantees. The three typed error kinds
//! pass through untouched - error classification happens below, at the
//! repository boundary.

use chrono::{DateTime, Utc};
use core_kernel::{CatalogError, JobTypeId};
use tracing::debug;

use crate::job_type::{JobType, JobTypeDraft, JobTypeUpdate};
use crate::ports::{JobTypeQueries, JobTypeStore};

/// Thin façade over one repository style
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: JobTypeStore> CatalogService<S> {
    pub async fn create(&self, draft: JobTypeDraft) -> Result<JobType, CatalogError> {
        debug!(code = %draft.code, "creating job type");
        self.store.insert(draft).await
    }

    pub async fn update(
        &self,
        id: JobTypeId,
        update: JobTypeUpdate,
    ) -> Result<JobType, CatalogError> {
        debug!(%id, code = %update.code, "updating job type");
        self.store.update(id, update).await
    }

    pub async fn get(&self, id: JobTypeId) -> Result<JobType, CatalogError> {
        self.store.get(id).await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<JobType, CatalogError> {
        self.store.get_by_code(code).await
    }

    pub async fn delete(&self, id: JobTypeId) -> Result<(), CatalogError> {
        debug!(%id, "deleting job type");
        self.store.delete(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_all().await
    }
}

/// Query derivatives, available only when the underlying store provides them
impl<S: JobTypeQueries> CatalogService<S> {
    pub async fn list_ordered_by_update_date_desc(&self) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_ordered_by_update_date_desc().await
    }

    pub async fn list_ordered_by_code_asc(&self) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_ordered_by_code_asc().await
    }

    pub async fn search_by_description(
        &self,
        fragment: &str,
    ) -> Result<Vec<JobType>, CatalogError> {
        self.store.search_by_description(fragment).await
    }

    pub async fn list_by_update_by(&self, update_by: &str) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_by_update_by(update_by).await
    }

    pub async fn list_updated_after(
        &self,
        after: DateTime<Utc>,
    ) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_updated_after(after).await
    }

    pub async fn list_updated_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<JobType>, CatalogError> {
        self.store.list_updated_between(start, end).await
    }

    pub async fn exists_by_id(&self, id: JobTypeId) -> Result<bool, CatalogError> {
        self.store.exists_by_id(id).await
    }

    pub async fn exists_by_code(&self, code: &str) -> Result<bool, CatalogError> {
        self.store.exists_by_code(code).await
    }

    pub async fn count_by_update_by(&self, update_by: &str) -> Result<i64, CatalogError> {
        self.store.count_by_update_by(update_by).await
    }

    pub async fn total_count(&self) -> Result<i64, CatalogError> {
        self.store.total_count().await
    }

    pub async fn delete_by_code(&self, code: &str) -> Result<(), CatalogError> {
        debug!(code, "deleting job type by code");
        self.store.delete_by_code(code).await
    }
}
