use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, resume::ResumeDto},
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::resume::ResumeService,
    },
};

pub static RESUME_TAG: &str = "resume";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload the caller's resume
///
/// The raw request body is stored as-is, replacing any previous resume, and the profile's
/// `resume_url` is pointed at it.
#[utoipa::path(
    put,
    path = "/api/storage/resumes/me",
    tag = RESUME_TAG,
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Resume stored", body = ResumeDto),
        (status = 400, description = "Empty upload", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_resume(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE);

    let resume = ResumeService::new(&state.db, &state.storage)
        .upload(&caller, content_type, &body)
        .await?;

    Ok((StatusCode::OK, Json(resume)))
}

/// Download an identity's resume
///
/// Readable by its owner and by recruiters the owner has applied to.
#[utoipa::path(
    get,
    path = "/api/storage/resumes/{identity_id}",
    tag = RESUME_TAG,
    params(("identity_id" = Uuid, Path, description = "Resume owner's identity ID")),
    responses(
        (status = 200, description = "Resume file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller may not read the resume", body = ErrorDto),
        (status = 404, description = "No resume stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resume(
    State(state): State<AppState>,
    session: Session,
    Path(identity_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let file = ResumeService::new(&state.db, &state.storage)
        .fetch(&caller, identity_id)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, file.content_type)],
        file.bytes,
    ))
}
