//! HTTP API Layer
//!
//! This crate provides the REST API for the job type catalog using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per repository style plus health checks
//! - **DTOs**: request/response shapes with field validation
//! - **Error Handling**: consistent error responses from the taxonomy
//!
//! Two service instances share the same pool: the call-style instance is
//! mounted under `/api/v1/job-types`, the mapped instance (with its derived
//! query endpoints) under `/api/v1/mapped/job-types`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use domain_catalog::CatalogService;
use infra_db::{MappedJobTypeRepository, ProceduralJobTypeRepository};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, job_type, job_type_mapped};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub procedural: CatalogService<ProceduralJobTypeRepository>,
    pub mapped: CatalogService<MappedJobTypeRepository>,
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState {
        procedural: CatalogService::new(ProceduralJobTypeRepository::new(pool.clone())),
        mapped: CatalogService::new(MappedJobTypeRepository::new(pool.clone())),
        pool,
        config,
    };

    // Public routes (no API prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Call-style routes
    let call_style_routes = Router::new()
        .route("/", post(job_type::create_job_type))
        .route("/", get(job_type::list_job_types))
        .route("/:id", get(job_type::get_job_type))
        .route("/:id", put(job_type::update_job_type))
        .route("/:id", delete(job_type::delete_job_type))
        .route("/code/:code", get(job_type::get_job_type_by_code));

    // Mapped routes: the same surface plus the derived queries
    let mapped_routes = Router::new()
        .route("/", post(job_type_mapped::create_job_type))
        .route("/", get(job_type_mapped::list_job_types))
        .route("/ordered/update-date", get(job_type_mapped::list_ordered_by_update_date))
        .route("/ordered/code", get(job_type_mapped::list_ordered_by_code))
        .route("/search", get(job_type_mapped::search_by_description))
        .route("/updated-after", get(job_type_mapped::list_updated_after))
        .route("/updated-between", get(job_type_mapped::list_updated_between))
        .route("/by-updater/:update_by", get(job_type_mapped::list_by_updater))
        .route("/count", get(job_type_mapped::total_count))
        .route("/count/by-updater/:update_by", get(job_type_mapped::count_by_updater))
        .route("/:id", get(job_type_mapped::get_job_type))
        .route("/:id", put(job_type_mapped::update_job_type))
        .route("/:id", delete(job_type_mapped::delete_job_type))
        .route("/:id/exists", get(job_type_mapped::exists_by_id))
        .route("/code/:code", get(job_type_mapped::get_job_type_by_code))
        .route("/code/:code", delete(job_type_mapped::delete_job_type_by_code))
        .route("/code/:code/exists", get(job_type_mapped::exists_by_code));

    let api_routes = Router::new()
        .nest("/job-types", call_style_routes)
        .nest("/mapped/job-types", mapped_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
