//! Repository integration tests
//!
//! Exercises both repository styles against a real PostgreSQL instance in a
//! container. Each test provisions an isolated database so the two
//! strategies cannot interfere. Tests skip when no Docker daemon is
//! reachable.

use domain_catalog::{JobTypeDraft, JobTypeQueries, JobTypeStore, JobTypeUpdate};
use infra_db::{MappedJobTypeRepository, ProceduralJobTypeRepository};
use test_utils::{assert_conflict, assert_not_found, create_isolated_test_database, DOCKER_AVAILABLE};

macro_rules! require_docker {
    () => {
        if !*DOCKER_AVAILABLE {
            eprintln!("skipping: no Docker daemon available");
            return;
        }
    };
}

/// Runs the shared store contract against one repository style
async fn exercise_store_contract(store: &dyn JobTypeStore) {
    // Create then fetch back
    let created = store
        .insert(JobTypeDraft::new("FULL_TIME", "admin").with_description("Full-time employment"))
        .await
        .unwrap();
    assert_eq!(created.code, "FULL_TIME");
    assert_eq!(created.update_by, "admin");

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.code, created.code);
    assert_eq!(fetched.description, created.description);

    let by_code = store.get_by_code("FULL_TIME").await.unwrap();
    assert_eq!(by_code.id, created.id);

    // Duplicate code conflicts
    assert_conflict(store.insert(JobTypeDraft::new("FULL_TIME", "other")).await);

    // Update restamps and re-validates uniqueness
    let second = store
        .insert(JobTypeDraft::new("PART_TIME", "admin"))
        .await
        .unwrap();
    assert_conflict(
        store
            .update(second.id, JobTypeUpdate::new("FULL_TIME", "admin"))
            .await,
    );
    let updated = store
        .update(second.id, JobTypeUpdate::new("PART_TIME", "hr"))
        .await
        .unwrap();
    assert_eq!(updated.update_by, "hr");
    assert!(updated.update_date >= second.update_date);

    // Missing ids and codes are NotFound, never generic
    assert_not_found(store.get(core_kernel::JobTypeId::new(999_999)).await);
    assert_not_found(store.get_by_code("NO_SUCH_CODE").await);
    assert_not_found(
        store
            .update(
                core_kernel::JobTypeId::new(999_999),
                JobTypeUpdate::new("X", "admin"),
            )
            .await,
    );
    assert_not_found(store.delete(core_kernel::JobTypeId::new(999_999)).await);

    // Delete then fetch is NotFound
    store.delete(second.id).await.unwrap();
    assert_not_found(store.get(second.id).await);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].code, "FULL_TIME");
}

#[tokio::test]
async fn test_procedural_repository_contract() {
    require_docker!();
    let db = create_isolated_test_database().await.unwrap();
    let repo = ProceduralJobTypeRepository::new(db.pool().clone());
    exercise_store_contract(&repo).await;
}

#[tokio::test]
async fn test_mapped_repository_contract() {
    require_docker!();
    let db = create_isolated_test_database().await.unwrap();
    let repo = MappedJobTypeRepository::new(db.pool().clone());
    exercise_store_contract(&repo).await;
}

#[tokio::test]
async fn test_both_styles_share_the_identifier_space() {
    require_docker!();
    let db = create_isolated_test_database().await.unwrap();
    let procedural = ProceduralJobTypeRepository::new(db.pool().clone());
    let mapped = MappedJobTypeRepository::new(db.pool().clone());

    let a = procedural
        .insert(JobTypeDraft::new("A", "admin"))
        .await
        .unwrap();
    let b = mapped.insert(JobTypeDraft::new("B", "admin")).await.unwrap();

    assert_ne!(a.id, b.id);

    // Records written through one style are visible through the other
    assert_eq!(mapped.get(a.id).await.unwrap().code, "A");
    assert_eq!(procedural.get(b.id).await.unwrap().code, "B");

    // Uniqueness holds across styles
    assert_conflict(mapped.insert(JobTypeDraft::new("A", "admin")).await);
    assert_conflict(procedural.insert(JobTypeDraft::new("B", "admin")).await);
}

#[tokio::test]
async fn test_mapped_derived_queries() {
    require_docker!();
    let db = create_isolated_test_database().await.unwrap();
    let repo = MappedJobTypeRepository::new(db.pool().clone());

    let start = chrono::Utc::now();
    for (code, description, user) in [
        ("CONTRACT", Some("Contractor"), "alice"),
        ("APPRENTICE", Some("Apprenticeship"), "alice"),
        ("FULL_TIME", Some("Full-time employment"), "bob"),
    ] {
        let mut draft = JobTypeDraft::new(code, user);
        if let Some(d) = description {
            draft = draft.with_description(d);
        }
        repo.insert(draft).await.unwrap();
    }
    let end = chrono::Utc::now();

    let by_code = repo.list_ordered_by_code_asc().await.unwrap();
    let codes: Vec<&str> = by_code.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["APPRENTICE", "CONTRACT", "FULL_TIME"]);

    let by_date = repo.list_ordered_by_update_date_desc().await.unwrap();
    assert!(by_date.windows(2).all(|p| p[0].update_date >= p[1].update_date));

    let hits = repo.search_by_description("EMPLOY").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "FULL_TIME");

    assert_eq!(repo.list_by_update_by("alice").await.unwrap().len(), 2);
    assert_eq!(repo.count_by_update_by("alice").await.unwrap(), 2);
    assert_eq!(repo.total_count().await.unwrap(), 3);

    assert_eq!(repo.list_updated_between(start, end).await.unwrap().len(), 3);
    assert!(repo.list_updated_after(end).await.unwrap().is_empty());

    assert!(repo.exists_by_code("CONTRACT").await.unwrap());
    repo.delete_by_code("CONTRACT").await.unwrap();
    assert!(!repo.exists_by_code("CONTRACT").await.unwrap());
    assert_not_found(repo.delete_by_code("CONTRACT").await);
}
