use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            ApplicantDto, ApplicationDto, ApplicationWithJobDto, ApplyDto,
            UpdateApplicationStatusDto,
        },
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::application::ApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Apply to a job
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/applications",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller is not a job seeker", body = ErrorDto),
        (status = 404, description = "Job not found or not open", body = ErrorDto),
        (status = 409, description = "Already applied to this job", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
    Json(apply): Json<ApplyDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let application = ApplicationService::new(&state.db)
        .apply(&caller, job_id, apply)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List applications to a job with applicant profiles
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Applications the caller may read", body = Vec<ApplicantDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_job_applications(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let applications = ApplicationService::new(&state.db)
        .list_for_job(&caller, job_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// List the caller's own applications
#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Caller's applications, newest first", body = Vec<ApplicationWithJobDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_own_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let applications = ApplicationService::new(&state.db)
        .list_mine(&caller)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Update an application's status
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApplicationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the job", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<Uuid>,
    Json(update): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let application = ApplicationService::new(&state.db)
        .update_status(&caller, application_id, update.status)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}
