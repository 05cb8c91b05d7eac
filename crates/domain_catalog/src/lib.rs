//! Job Type Catalog Domain
//!
//! This crate defines the catalog entity, the repository port traits both
//! persistence strategies implement, and the service façade the HTTP layer
//! consumes.
//!
//! # Architecture
//!
//! - **Entity**: `JobType` plus the draft/update input shapes
//! - **Ports**: `JobTypeStore` (the capability set shared by both strategies)
//!   and `JobTypeQueries` (the mapped-only query derivatives)
//! - **Service**: `CatalogService<S>` - one façade, parametrized over either
//!   repository style, so business rules are never duplicated

pub mod job_type;
pub mod ports;
pub mod service;

pub use job_type::{JobType, JobTypeDraft, JobTypeUpdate};
pub use ports::{JobTypeQueries, JobTypeStore};
pub use service::CatalogService;
