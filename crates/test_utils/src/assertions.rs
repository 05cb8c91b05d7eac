//! Custom Test Assertions
//!
//! Assertion helpers for catalog types with more meaningful failure
//! messages than the standard macros.

use core_kernel::CatalogError;
use domain_catalog::JobType;

/// Asserts that two records are equal in every field except the audit stamp
///
/// # Panics
///
/// Panics with a field-level message when code, description, or update_by
/// differ
pub fn assert_same_content(actual: &JobType, expected: &JobType) {
    assert_eq!(
        actual.code, expected.code,
        "Code mismatch: actual={}, expected={}",
        actual.code, expected.code
    );
    assert_eq!(
        actual.description, expected.description,
        "Description mismatch on code {}",
        actual.code
    );
    assert_eq!(
        actual.update_by, expected.update_by,
        "Updater mismatch on code {}",
        actual.code
    );
}

/// Asserts that a result failed with NotFound
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, CatalogError>) {
    match result {
        Err(err) if err.is_not_found() => {}
        Err(err) => panic!("Expected NotFound, got {:?}", err),
        Ok(value) => panic!("Expected NotFound, got Ok({:?})", value),
    }
}

/// Asserts that a result failed with Conflict
pub fn assert_conflict<T: std::fmt::Debug>(result: Result<T, CatalogError>) {
    match result {
        Err(err) if err.is_conflict() => {}
        Err(err) => panic!("Expected Conflict, got {:?}", err),
        Ok(value) => panic!("Expected Conflict, got Ok({:?})", value),
    }
}

/// Asserts that a record sequence is sorted ascending by code
pub fn assert_sorted_by_code(records: &[JobType]) {
    let sorted = records.windows(2).all(|pair| pair[0].code <= pair[1].code);
    assert!(
        sorted,
        "Records not sorted by code: {:?}",
        records.iter().map(|r| r.code.as_str()).collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::JobTypeBuilder;

    #[test]
    fn test_assert_same_content_passes_for_equal_records() {
        let a = JobTypeBuilder::new().build();
        let b = JobTypeBuilder::new()
            .with_update_date(crate::fixtures::TemporalFixtures::after_stamp())
            .build();
        assert_same_content(&a, &b);
    }

    #[test]
    fn test_assert_sorted_by_code() {
        let records = vec![
            JobTypeBuilder::new().with_id(1).with_code("A").build(),
            JobTypeBuilder::new().with_id(2).with_code("B").build(),
        ];
        assert_sorted_by_code(&records);
    }

    #[test]
    #[should_panic(expected = "Expected NotFound")]
    fn test_assert_not_found_panics_on_ok() {
        assert_not_found(Ok(42));
    }
}
