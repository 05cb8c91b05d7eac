//! Strongly-typed identifiers for catalog entities
//!
//! The catalog id is assigned from a database sequence, so the newtype wraps
//! the sequence value rather than a generated UUID. Both persistence
//! strategies share the same identifier space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a job type record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct JobTypeId(i64);

impl JobTypeId {
    /// Creates an identifier from a sequence-assigned value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for JobTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobTypeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for JobTypeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<JobTypeId> for i64 {
    fn from(id: JobTypeId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        let id = JobTypeId::new(42);
        let parsed: JobTypeId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_i64_conversion() {
        let id = JobTypeId::from(7);
        let back: i64 = id.into();
        assert_eq!(back, 7);
    }
}
