//! Handlers for the mapped catalog endpoints
//!
//! Same CRUD surface as the call-style handlers, plus the derived query
//! operations only the mapped repository provides.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use core_kernel::JobTypeId;
use validator::Validate;

use crate::dto::job_type::{
    CountResponse, DescriptionSearchParams, ExistsResponse, JobTypeRequest, JobTypeResponse,
    UpdateJobTypeRequest, UpdatedAfterParams, UpdatedBetweenParams,
};
use crate::{error::ApiError, AppState};

/// Creates a new job type
pub async fn create_job_type(
    State(state): State<AppState>,
    Json(request): Json<JobTypeRequest>,
) -> Result<(StatusCode, Json<JobTypeResponse>), ApiError> {
    request.validate()?;
    let record = state.mapped.create(request.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists all job types
pub async fn list_job_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Gets a job type by id
pub async fn get_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    let record = state.mapped.get(id).await?;
    Ok(Json(record.into()))
}

/// Gets a job type by its unique code
pub async fn get_job_type_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    let record = state.mapped.get_by_code(&code).await?;
    Ok(Json(record.into()))
}

/// Updates a job type
pub async fn update_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
    Json(request): Json<UpdateJobTypeRequest>,
) -> Result<Json<JobTypeResponse>, ApiError> {
    request.validate()?;
    let record = state.mapped.update(id, request.into_update()).await?;
    Ok(Json(record.into()))
}

/// Deletes a job type by id
pub async fn delete_job_type(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
) -> Result<StatusCode, ApiError> {
    state.mapped.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a job type by its unique code
pub async fn delete_job_type_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.mapped.delete_by_code(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists job types ordered by update timestamp, newest first
pub async fn list_ordered_by_update_date(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.list_ordered_by_update_date_desc().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Lists job types ordered by code, ascending
pub async fn list_ordered_by_code(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.list_ordered_by_code_asc().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Case-insensitive substring search on description
pub async fn search_by_description(
    State(state): State<AppState>,
    Query(params): Query<DescriptionSearchParams>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.search_by_description(&params.description).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Lists job types last written by the given user
pub async fn list_by_updater(
    State(state): State<AppState>,
    Path(update_by): Path<String>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.list_by_update_by(&update_by).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Lists job types updated strictly after the given instant
pub async fn list_updated_after(
    State(state): State<AppState>,
    Query(params): Query<UpdatedAfterParams>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state.mapped.list_updated_after(params.after).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Lists job types updated within the given bounds, both inclusive
pub async fn list_updated_between(
    State(state): State<AppState>,
    Query(params): Query<UpdatedBetweenParams>,
) -> Result<Json<Vec<JobTypeResponse>>, ApiError> {
    let records = state
        .mapped
        .list_updated_between(params.start, params.end)
        .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Checks whether a job type exists by id
pub async fn exists_by_id(
    State(state): State<AppState>,
    Path(id): Path<JobTypeId>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = state.mapped.exists_by_id(id).await?;
    Ok(Json(ExistsResponse { exists }))
}

/// Checks whether a job type exists by code
pub async fn exists_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = state.mapped.exists_by_code(&code).await?;
    Ok(Json(ExistsResponse { exists }))
}

/// Counts job types last written by the given user
pub async fn count_by_updater(
    State(state): State<AppState>,
    Path(update_by): Path<String>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = state.mapped.count_by_update_by(&update_by).await?;
    Ok(Json(CountResponse { count }))
}

/// Counts all job types
pub async fn total_count(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = state.mapped.total_count().await?;
    Ok(Json(CountResponse { count }))
}
