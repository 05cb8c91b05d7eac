//! Handlers for the call-style catalog endpoints
//!
//! Every operation here goes through the service instance backed by the
//! stored-routine repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::JobTypeId;
use validator::Validate;

use crate::dto::job_type::{JobTypeRequest, JobTypeResponse, UpdateJobTypeRequest};
use crate::{error::ApiError, AppState};

/// Creates a new job type
pub async fn create_job_type(
    State(state): State<AppState>,
    Json(request): Json<JobTypeRequest>,
) -> Result<(StatusCode, Json<JobTypeResponse>), ApiError> {
    request.validate()?;
    let record = state.procedural.create(request.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists all job types
pub async fn list_job_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.procedural.list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Gets a job type by id
pub async fn get_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    let record = state.procedural.get(id).await?;
    Ok(Json(record.into()))
}

/// Gets a job type by its unique code
pub async fn get_job_type_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    let record = state.procedural.get_by_code(&code).await?;
    Ok(Json(record.into()))
}

/// Updates a job type
pub async fn update_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
    Json(request): Json<UpdateJobTypeRequest>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    request.validate()?;
    let record = state.procedural.update(id, request.into_update()).await?;
    Ok(Json(record.into()))
}

/// Deletes a job type
pub async fn delete_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
) -> Result<StatusCode, ApiError> {
    state.procedural.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
