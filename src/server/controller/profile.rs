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
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get a profile by ID
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.db)
        .get_profile(profile_id)
        .await?
        .ok_or_else(|| Error::NotFound("Profile".to_string()))?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the signed in caller's profile
///
/// Omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/profiles/me",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_own_profile(
    State(state): State<AppState>,
    session: Session,
    Json(changes): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let profile = ProfileService::new(&state.db)
        .update_own_profile(&caller, changes)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
