use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        job::{CreateJobDto, JobDto, JobQuery, UpdateJobDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::job::JobService,
    },
};

pub static JOB_TAG: &str = "job";

/// List jobs visible to the caller
///
/// Anonymous callers and other users see open jobs only, recruiters additionally see their
/// own jobs in any status.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(JobQuery),
    responses(
        (status = 200, description = "Matching jobs, newest first", body = Vec<JobDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<JobQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let jobs = JobService::new(&state.db).list_jobs(&caller, query).await?;

    Ok((StatusCode::OK, Json(jobs)))
}

/// List the caller's own jobs in any status
#[utoipa::path(
    get,
    path = "/api/jobs/mine",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Caller's jobs, newest first", body = Vec<JobDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_own_jobs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let jobs = JobService::new(&state.db).list_own_jobs(&caller).await?;

    Ok((StatusCode::OK, Json(jobs)))
}

/// Get a job by ID
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = JobDto),
        (status = 404, description = "Job not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let job = JobService::new(&state.db).get_job(&caller, job_id).await?;

    Ok((StatusCode::OK, Json(job)))
}

/// Post a job
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job created", body = JobDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller is not a recruiter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    session: Session,
    Json(job): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let job = JobService::new(&state.db).create_job(&caller, job).await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Update an own job
///
/// Omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Job updated", body = JobDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the job", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
    Json(changes): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let job = JobService::new(&state.db)
        .update_job(&caller, job_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(job)))
}

/// Delete an own job along with its applications and saves
#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the job", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    JobService::new(&state.db).delete_job(&caller, job_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
