//! The shared identifier sequence
//!
//! Both repository styles allocate ids from the same database sequence, so
//! records created through either strategy share one identifier space.

use core_kernel::JobTypeId;

use crate::error::DatabaseError;
use crate::gateway::{Params, SqlGateway};

const NEXT_ID_SQL: &str = "SELECT nextval('seq_job_type')";

/// Allocates catalog identifiers from `seq_job_type`
#[derive(Debug, Clone)]
pub struct IdSequence {
    gateway: SqlGateway,
}

impl IdSequence {
    pub fn new(gateway: SqlGateway) -> Self {
        Self { gateway }
    }

    /// Obtains the next identifier value
    pub async fn next(&self) -> Result<JobTypeId, DatabaseError> {
        let value: i64 = self.gateway.fetch_scalar(NEXT_ID_SQL, Params::new()).await?;
        Ok(JobTypeId::new(value))
    }
}
