//! Tests for core_kernel identifier types

use core_kernel::JobTypeId;
use proptest::prelude::*;

#[test]
fn test_job_type_id_display() {
    let id = JobTypeId::new(42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn test_job_type_id_ordering() {
    let a = JobTypeId::new(1);
    let b = JobTypeId::new(2);
    assert!(a < b);
}

#[test]
fn test_job_type_id_serde_transparent() {
    let id = JobTypeId::new(7);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "7");

    let back: JobTypeId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

proptest! {
    #[test]
    fn prop_parse_roundtrip(value in any::<i64>()) {
        let id = JobTypeId::new(value);
        let parsed: JobTypeId = id.to_string().parse().unwrap();
        prop_assert_eq!(id, parsed);
    }
}
