//! Catalog Repository Ports
//!
//! This module defines the port interfaces the persistence layer implements.
//! Two adapters exist in `infra_db`:
//!
//! - **Call-style**: delegates every operation to named stored routines
//! - **Mapped**: issues its own SQL directly against the catalog table
//!
//! Both implement `JobTypeStore`, the capability set shared by the two
//! strategies. The mapped adapter additionally implements `JobTypeQueries`,
//! the richer query derivatives. The façade is generic over the store, so
//! neither strategy duplicates business rules.
//!
//! Every operation resolves to exactly one of the three `CatalogError`
//! kinds; raw storage failures never cross these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{CatalogError, JobTypeId};

use crate::job_type::{JobType, JobTypeDraft, JobTypeUpdate};

/// The capability set shared by both persistence strategies
#[async_trait]
pub trait JobTypeStore: Send + Sync {
    /// Creates a record with a freshly allocated id and server-stamped
    /// timestamp. Fails with Conflict when the code is already taken.
    async fn insert(&self, draft: JobTypeDraft) -> Result<JobType, CatalogError>;

    /// Rewrites all mutable fields and restamps the audit columns,
    /// regardless of whether anything visibly changed. Fails with NotFound
    /// when the id does not exist, and with Conflict when the new code is
    /// used by a different record.
    async fn update(&self, id: JobTypeId, update: JobTypeUpdate) -> Result<JobType, CatalogError>;

    /// Fetches a record by id, NotFound when absent
    async fn get(&self, id: JobTypeId) -> Result<JobType, CatalogError>;

    /// Fetches a record by its unique code, NotFound when absent
    async fn get_by_code(&self, code: &str) -> Result<JobType, CatalogError>;

    /// Physically deletes a record, NotFound when the id does not exist
    async fn delete(&self, id: JobTypeId) -> Result<(), CatalogError>;

    /// Returns every record in the catalog
    async fn list_all(&self) -> Result<Vec<JobType>, CatalogError>;
}

/// Query derivatives only the mapped strategy provides
#[async_trait]
pub trait JobTypeQueries: JobTypeStore {
    /// Full set ordered by update timestamp, newest first
    async fn list_ordered_by_update_date_desc(&self) -> Result<Vec<JobType>, CatalogError>;

    /// Full set ordered lexicographically ascending by code
    async fn list_ordered_by_code_asc(&self) -> Result<Vec<JobType>, CatalogError>;

    /// Case-insensitive substring match on description
    async fn search_by_description(&self, fragment: &str) -> Result<Vec<JobType>, CatalogError>;

    /// Records last written by the given user
    async fn list_by_update_by(&self, update_by: &str) -> Result<Vec<JobType>, CatalogError>;

    /// Records updated strictly after the given instant
    async fn list_updated_after(&self, after: DateTime<Utc>) -> Result<Vec<JobType>, CatalogError>;

    /// Records updated within the given bounds, both inclusive
    async fn list_updated_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<JobType>, CatalogError>;

    async fn exists_by_id(&self, id: JobTypeId) -> Result<bool, CatalogError>;

    async fn exists_by_code(&self, code: &str) -> Result<bool, CatalogError>;

    async fn count_by_update_by(&self, update_by: &str) -> Result<i64, CatalogError>;

    async fn total_count(&self) -> Result<i64, CatalogError>;

    /// Physically deletes by code, NotFound when the code does not exist
    async fn delete_by_code(&self, code: &str) -> Result<(), CatalogError>;
}

/// In-memory implementation of both ports for testing
///
/// Reproduces the contract of the real adapters - uniqueness of code,
/// audit stamping on every write, not-found semantics - without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory store keyed by id, ids assigned from a local counter
    #[derive(Debug)]
    pub struct MockJobTypeStore {
        records: Arc<RwLock<BTreeMap<i64, JobType>>>,
        next_id: AtomicI64,
    }

    impl Default for MockJobTypeStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockJobTypeStore {
        pub fn new() -> Self {
            Self {
                records: Arc::new(RwLock::new(BTreeMap::new())),
                next_id: AtomicI64::new(1),
            }
        }

        fn allocate_id(&self) -> JobTypeId {
            JobTypeId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[async_trait]
    impl JobTypeStore for MockJobTypeStore {
        async fn insert(&self, draft: JobTypeDraft) -> Result<JobType, CatalogError> {
            let mut records = self.records.write().await;
            if records.values().any(|r| r.code == draft.code) {
                return Err(CatalogError::conflict(format!(
                    "job type with code '{}' already exists",
                    draft.code
                )));
            }

            let id = self.allocate_id();
            let record = JobType {
                id,
                code: draft.code,
                description: draft.description,
                update_date: Utc::now(),
                update_by: draft.update_by,
            };
            records.insert(id.value(), record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            id: JobTypeId,
            update: JobTypeUpdate,
        ) -> Result<JobType, CatalogError> {
            let mut records = self.records.write().await;
            if !records.contains_key(&id.value()) {
                return Err(CatalogError::not_found("Job type", format!("id {}", id)));
            }
            if records
                .values()
                .any(|r| r.id != id && r.code == update.code)
            {
                return Err(CatalogError::conflict(format!(
                    "job type with code '{}' already exists",
                    update.code
                )));
            }

            let record = records.get_mut(&id.value()).unwrap();
            record.code = update.code;
            record.description = update.description;
            record.update_date = Utc::now();
            record.update_by = update.update_by;
            Ok(record.clone())
        }

        async fn get(&self, id: JobTypeId) -> Result<JobType, CatalogError> {
            self.records
                .read()
                .await
                .get(&id.value())
                .cloned()
                .ok_or_else(|| CatalogError::not_found("Job type", format!("id {}", id)))
        }

        async fn get_by_code(&self, code: &str) -> Result<JobType, CatalogError> {
            self.records
                .read()
                .await
                .values()
                .find(|r| r.code == code)
                .cloned()
                .ok_or_else(|| CatalogError::not_found("Job type", format!("code '{}'", code)))
        }

        async fn delete(&self, id: JobTypeId) -> Result<(), CatalogError> {
            self.records
                .write()
                .await
                .remove(&id.value())
                .map(|_| ())
                .ok_or_else(|| CatalogError::not_found("Job type", format!("id {}", id)))
        }

        async fn list_all(&self) -> Result<Vec<JobType>, CatalogError> {
            Ok(self.records.read().await.values().cloned().collect())
        }
    }

    #[async_trait]
    impl JobTypeQueries for MockJobTypeStore {
        async fn list_ordered_by_update_date_desc(&self) -> Result<Vec<JobType>, CatalogError> {
            let mut all = self.list_all().await?;
            all.sort_by(|a, b| b.update_date.cmp(&a.update_date));
            Ok(all)
        }

        async fn list_ordered_by_code_asc(&self) -> Result<Vec<JobType>, CatalogError> {
            let mut all = self.list_all().await?;
            all.sort_by(|a, b| a.code.cmp(&b.code));
            Ok(all)
        }

        async fn search_by_description(
            &self,
            fragment: &str,
        ) -> Result<Vec<JobType>, CatalogError> {
            let needle = fragment.to_lowercase();
            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| {
                    r.description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect())
        }

        async fn list_by_update_by(&self, update_by: &str) -> Result<Vec<JobType>, CatalogError> {
            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| r.update_by == update_by)
                .cloned()
                .collect())
        }

        async fn list_updated_after(
            &self,
            after: DateTime<Utc>,
        ) -> Result<Vec<JobType>, CatalogError> {
            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| r.update_date > after)
                .cloned()
                .collect())
        }

        async fn list_updated_between(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<Vec<JobType>, CatalogError> {
            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| r.update_date >= start && r.update_date <= end)
                .cloned()
                .collect())
        }

        async fn exists_by_id(&self, id: JobTypeId) -> Result<bool, CatalogError> {
            Ok(self.records.read().await.contains_key(&id.value()))
        }

        async fn exists_by_code(&self, code: &str) -> Result<bool, CatalogError> {
            Ok(self.records.read().await.values().any(|r| r.code == code))
        }

        async fn count_by_update_by(&self, update_by: &str) -> Result<i64, CatalogError> {
            Ok(self
                .records
                .read()
                .await
                .values()
                .filter(|r| r.update_by == update_by)
                .count() as i64)
        }

        async fn total_count(&self) -> Result<i64, CatalogError> {
            Ok(self.records.read().await.len() as i64)
        }

        async fn delete_by_code(&self, code: &str) -> Result<(), CatalogError> {
            let mut records = self.records.write().await;
            let id = records
                .values()
                .find(|r| r.code == code)
                .map(|r| r.id.value());
            match id {
                Some(id) => {
                    records.remove(&id);
                    Ok(())
                }
                None => Err(CatalogError::not_found(
                    "Job type",
                    format!("code '{}'", code),
                )),
            }
        }
    }
}
