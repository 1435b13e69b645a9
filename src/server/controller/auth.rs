use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SignInDto, SignUpDto},
        profile::ProfileDto,
    },
    server::{
        controller::util::get_caller::get_caller,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::identity::SessionIdentityId},
        policy::Caller,
        service::{identity::IdentityService, profile::ProfileService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create an account and sign in
///
/// Provisions a job seeker profile for the new identity, or a recruiter profile when
/// requested, then starts a session for it.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created and signed in", body = ProfileDto),
        (status = 400, description = "Invalid email, password or role", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Json(sign_up): Json<SignUpDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = IdentityService::new(&state.db).sign_up(sign_up).await?;

    session.cycle_id().await?;
    SessionIdentityId::insert(&session, profile.id).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = ProfileDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(sign_in): Json<SignInDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = IdentityService::new(&state.db).sign_in(sign_in).await?;

    session.cycle_id().await?;
    SessionIdentityId::insert(&session, profile.id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Sign out by clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored errors in the redis store
    if SessionIdentityId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed in caller's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in caller's profile", body = ProfileDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Caller::Identity(identity) = get_caller(&state, &session).await? else {
        return Err(AuthError::IdentityNotInSession.into());
    };

    let profile: ProfileDto = ProfileService::new(&state.db)
        .get_profile(identity.id)
        .await?
        .ok_or(AuthError::IdentityNotInDatabase(identity.id))?;

    Ok((StatusCode::OK, Json(profile)))
}
