//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the job type
//! catalog using SQLx.
//!
//! # Architecture
//!
//! Two repository styles sit behind the same domain ports:
//!
//! - `ProceduralJobTypeRepository` delegates every operation to named stored
//!   routines and translates their signals (SQLSTATE `JT404`, null output
//!   columns) into the error taxonomy.
//! - `MappedJobTypeRepository` issues its own SQL against the catalog table
//!   and adds the derived query operations.
//!
//! Both share the `SqlGateway` (statement/routine execution and typed
//! decoding) and the `IdSequence` (one identifier space for the whole
//! catalog).

pub mod error;
pub mod gateway;
pub mod pool;
pub mod repositories;
pub mod sequence;

pub use error::DatabaseError;
pub use gateway::{Params, SqlGateway};
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::{MappedJobTypeRepository, ProceduralJobTypeRepository};
pub use sequence::IdSequence;
