use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, saved_job::SavedJobDto},
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::saved_job::SavedJobService,
    },
};

pub static SAVED_JOB_TAG: &str = "saved job";

/// List the caller's saved jobs
#[utoipa::path(
    get,
    path = "/api/saved-jobs",
    tag = SAVED_JOB_TAG,
    responses(
        (status = 200, description = "Saved jobs, newest first", body = Vec<SavedJobDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_saved_jobs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let saved_jobs = SavedJobService::new(&state.db).list(&caller).await?;

    Ok((StatusCode::OK, Json(saved_jobs)))
}

/// Save a job
#[utoipa::path(
    put,
    path = "/api/saved-jobs/{job_id}",
    tag = SAVED_JOB_TAG,
    params(("job_id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 201, description = "Job saved", body = SavedJobDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Job not found or not visible", body = ErrorDto),
        (status = 409, description = "Job already saved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let saved_job = SavedJobService::new(&state.db).save(&caller, job_id).await?;

    Ok((StatusCode::CREATED, Json(saved_job)))
}

/// Remove a saved job
#[utoipa::path(
    delete,
    path = "/api/saved-jobs/{job_id}",
    tag = SAVED_JOB_TAG,
    params(("job_id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Saved job removed"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Job was not saved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_saved_job(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    SavedJobService::new(&state.db)
        .remove(&caller, job_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
