//! Tests for core_kernel error types

use core_kernel::CatalogError;

#[test]
fn test_catalog_error_not_found() {
    let error = CatalogError::not_found("Job type", "id 999");

    match error {
        CatalogError::NotFound { entity, key } => {
            assert_eq!(entity, "Job type");
            assert_eq!(key, "id 999");
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_catalog_error_conflict() {
    let error = CatalogError::conflict("code 'FULL_TIME' already exists");

    match error {
        CatalogError::Conflict { message } => assert!(message.contains("already exists")),
        _ => panic!("Expected Conflict error"),
    }
}

#[test]
fn test_catalog_error_service_failure() {
    let error = CatalogError::failure("pool timed out");

    match error {
        CatalogError::ServiceFailure { message } => assert_eq!(message, "pool timed out"),
        _ => panic!("Expected ServiceFailure error"),
    }
}

#[test]
fn test_catalog_error_predicates() {
    assert!(CatalogError::not_found("Job type", "code 'X'").is_not_found());
    assert!(CatalogError::conflict("duplicate").is_conflict());

    let failure = CatalogError::failure("boom");
    assert!(!failure.is_not_found());
    assert!(!failure.is_conflict());
}

#[test]
fn test_catalog_error_display() {
    let error = CatalogError::not_found("Job type", "code 'PART_TIME'");
    let display = format!("{}", error);

    assert_eq!(display, "Job type with code 'PART_TIME' not found");
}
