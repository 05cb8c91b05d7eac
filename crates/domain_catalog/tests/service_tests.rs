//! Tests for the catalog service façade
//!
//! These exercise the full contract through `CatalogService` backed by the
//! in-memory store, which reproduces the adapters' semantics.

use chrono::Utc;
use core_kernel::JobTypeId;
use domain_catalog::ports::mock::MockJobTypeStore;
use domain_catalog::{CatalogService, JobTypeDraft, JobTypeUpdate};

fn service() -> CatalogService<MockJobTypeStore> {
    CatalogService::new(MockJobTypeStore::new())
}

mod create_and_get {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let svc = service();
        let before = Utc::now();

        let created = svc
            .create(JobTypeDraft::new("FULL_TIME", "admin").with_description("Full-time employment"))
            .await
            .unwrap();

        assert_eq!(created.code, "FULL_TIME");
        assert_eq!(created.description.as_deref(), Some("Full-time employment"));
        assert_eq!(created.update_by, "admin");
        assert!(created.update_date >= before);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched.code, created.code);
        assert_eq!(fetched.description, created.description);
        assert_eq!(fetched.update_by, created.update_by);
    }

    #[tokio::test]
    async fn test_create_duplicate_code_conflicts() {
        let svc = service();
        svc.create(JobTypeDraft::new("FULL_TIME", "admin").with_description("Full-time employment"))
            .await
            .unwrap();

        let err = svc
            .create(JobTypeDraft::new("FULL_TIME", "admin"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_get_on_empty_catalog_not_found() {
        let svc = service();
        let err = svc.get(JobTypeId::new(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_by_code_not_found() {
        let svc = service();
        let err = svc.get_by_code("MISSING").await.unwrap_err();
        assert!(err.is_not_found());
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_nonexistent_id_never_creates() {
        let svc = service();
        let err = svc
            .update(JobTypeId::new(42), JobTypeUpdate::new("X", "admin"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_foreign_code_conflicts_and_leaves_catalog_unchanged() {
        let svc = service();
        let a = svc.create(JobTypeDraft::new("A", "admin")).await.unwrap();
        let b = svc.create(JobTypeDraft::new("B", "admin")).await.unwrap();

        let err = svc
            .update(a.id, JobTypeUpdate::new("B", "admin"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        // Catalog still contains exactly A and B, unchanged
        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(svc.get(a.id).await.unwrap().code, "A");
        assert_eq!(svc.get(b.id).await.unwrap().code, "B");
    }

    #[tokio::test]
    async fn test_update_to_own_code_never_conflicts() {
        let svc = service();
        let a = svc
            .create(JobTypeDraft::new("A", "admin").with_description("first"))
            .await
            .unwrap();

        let updated = svc
            .update(a.id, JobTypeUpdate::new("A", "hr").with_description("second"))
            .await
            .unwrap();

        assert_eq!(updated.code, "A");
        assert_eq!(updated.description.as_deref(), Some("second"));
        assert_eq!(updated.update_by, "hr");
    }

    #[tokio::test]
    async fn test_update_always_restamps_audit_fields() {
        let svc = service();
        let a = svc.create(JobTypeDraft::new("A", "admin")).await.unwrap();

        // No visible change; audit fields refresh anyway
        let updated = svc
            .update(a.id, JobTypeUpdate::new("A", "admin"))
            .await
            .unwrap();
        assert!(updated.update_date >= a.update_date);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_nonexistent_not_found() {
        let svc = service();
        let err = svc.delete(JobTypeId::new(1)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let svc = service();
        let created = svc.create(JobTypeDraft::new("TEMP", "admin")).await.unwrap();

        svc.delete(created.id).await.unwrap();
        assert!(svc.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_by_code() {
        let svc = service();
        svc.create(JobTypeDraft::new("TEMP", "admin")).await.unwrap();

        svc.delete_by_code("TEMP").await.unwrap();
        assert!(svc.delete_by_code("TEMP").await.unwrap_err().is_not_found());
    }
}

mod derived_queries {
    use super::*;

    #[tokio::test]
    async fn test_order_by_code_asc_empty_set() {
        let svc = service();
        assert!(svc.list_ordered_by_code_asc().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_by_code_asc_sorts_lexicographically() {
        let svc = service();
        for code in ["CONTRACT", "APPRENTICE", "FULL_TIME", "BOARD"] {
            svc.create(JobTypeDraft::new(code, "admin")).await.unwrap();
        }

        let codes: Vec<String> = svc
            .list_ordered_by_code_asc()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(codes, ["APPRENTICE", "BOARD", "CONTRACT", "FULL_TIME"]);
    }

    #[tokio::test]
    async fn test_order_by_update_date_desc() {
        let svc = service();
        svc.create(JobTypeDraft::new("OLD", "admin")).await.unwrap();
        svc.create(JobTypeDraft::new("NEW", "admin")).await.unwrap();

        let ordered = svc.list_ordered_by_update_date_desc().await.unwrap();
        assert_eq!(ordered.len(), 2);
        assert!(ordered[0].update_date >= ordered[1].update_date);
    }

    #[tokio::test]
    async fn test_search_by_description_case_insensitive() {
        let svc = service();
        svc.create(JobTypeDraft::new("FT", "admin").with_description("Full-time employment"))
            .await
            .unwrap();
        svc.create(JobTypeDraft::new("CT", "admin").with_description("Contractor"))
            .await
            .unwrap();

        for fragment in ["employ", "EMPLOY"] {
            let hits = svc.search_by_description(fragment).await.unwrap();
            assert_eq!(hits.len(), 1, "fragment {:?}", fragment);
            assert_eq!(hits[0].code, "FT");
        }
    }

    #[tokio::test]
    async fn test_filter_by_update_by_and_counts() {
        let svc = service();
        svc.create(JobTypeDraft::new("A", "alice")).await.unwrap();
        svc.create(JobTypeDraft::new("B", "alice")).await.unwrap();
        svc.create(JobTypeDraft::new("C", "bob")).await.unwrap();

        assert_eq!(svc.list_by_update_by("alice").await.unwrap().len(), 2);
        assert_eq!(svc.count_by_update_by("alice").await.unwrap(), 2);
        assert_eq!(svc.count_by_update_by("nobody").await.unwrap(), 0);
        assert_eq!(svc.total_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_date_range_filters() {
        let svc = service();
        let before = Utc::now();
        let created = svc.create(JobTypeDraft::new("A", "admin")).await.unwrap();
        let after = Utc::now();

        // Strictly-after excludes the bound itself
        assert_eq!(svc.list_updated_after(before).await.unwrap().len(), 1);
        assert!(svc.list_updated_after(after).await.unwrap().is_empty()
            || created.update_date > after);

        // Between treats both bounds as inclusive
        let between = svc
            .list_updated_between(created.update_date, created.update_date)
            .await
            .unwrap();
        assert_eq!(between.len(), 1);
    }

    #[tokio::test]
    async fn test_existence_checks() {
        let svc = service();
        let created = svc.create(JobTypeDraft::new("A", "admin")).await.unwrap();

        assert!(svc.exists_by_id(created.id).await.unwrap());
        assert!(svc.exists_by_code("A").await.unwrap());
        assert!(!svc.exists_by_id(JobTypeId::new(999)).await.unwrap());
        assert!(!svc.exists_by_code("Z").await.unwrap());
    }
}
