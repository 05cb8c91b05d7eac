//! Core Kernel - Foundational types for the job type catalog
//!
//! This crate provides the building blocks shared by every other crate:
//! - The outward error taxonomy every repository operation resolves to
//! - The strongly-typed catalog identifier

pub mod error;
pub mod identifiers;

pub use error::CatalogError;
pub use identifiers::JobTypeId;
