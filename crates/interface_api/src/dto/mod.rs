//! Request/Response data transfer objects

pub mod job_type;
