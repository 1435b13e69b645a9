use axum::{extract::State, http::StatusCode, Json};
use jobboard::{
    model::{
        auth::{SignInDto, SignUpDto},
        profile::ProfileDto,
    },
    server::controller::auth::{get_me, sign_in, sign_out, sign_up},
};

use super::*;

fn sign_up_dto(email: &str) -> SignUpDto {
    SignUpDto {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        full_name: Some("Ada Lovelace".to_string()),
        role: None,
    }
}

/// Expect 201 with the provisioned profile and the caller signed in
#[tokio::test]
async fn sign_up_creates_profile_and_session() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        Json(sign_up_dto("ada@example.com")),
    )
    .await;
    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let profile: ProfileDto = read_json(resp).await;

    let me = into_response(get_me(State(test.into_app_state()), test.session.clone()).await);
    assert_eq!(me.status(), StatusCode::OK);
    let me: ProfileDto = read_json(me).await;
    assert_eq!(me.id, profile.id);
    assert_eq!(me.full_name, "Ada Lovelace");

    Ok(())
}

/// Expect 409 when the email is already registered
#[tokio::test]
async fn sign_up_rejects_taken_email() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let first = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        Json(sign_up_dto("ada@example.com")),
    )
    .await;
    assert_eq!(into_response(first).status(), StatusCode::CREATED);

    let second = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        Json(sign_up_dto("ADA@example.com")),
    )
    .await;
    assert_eq!(into_response(second).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 when requesting the admin role
#[tokio::test]
async fn sign_up_rejects_admin_role() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignUpDto {
            role: Some(entity::sea_orm_active_enums::UserRole::Admin),
            ..sign_up_dto("ada@example.com")
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect sign in to succeed with the right password and fail with 401 otherwise
#[tokio::test]
async fn sign_in_checks_password() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let created = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        Json(sign_up_dto("ada@example.com")),
    )
    .await;
    assert_eq!(into_response(created).status(), StatusCode::CREATED);

    let wrong = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto {
            email: "ada@example.com".to_string(),
            password: "not the password".to_string(),
        }),
    )
    .await;
    assert_eq!(into_response(wrong).status(), StatusCode::UNAUTHORIZED);

    let right = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto {
            email: "ada@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;
    assert_eq!(into_response(right).status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 for an unknown email
#[tokio::test]
async fn sign_in_rejects_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = sign_in(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SignInDto {
            email: "nobody@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 204 on sign out and the caller anonymous afterwards
#[tokio::test]
async fn sign_out_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let profile = test.profile().insert_job_seeker().await?;
    test.sign_in_as(profile.id).await;

    let result = sign_out(test.session.clone()).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let me = get_me(State(test.into_app_state()), test.session.clone()).await;
    assert_eq!(into_response(me).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 and a cleared session when the session's identity no longer exists
#[tokio::test]
async fn get_me_clears_session_for_missing_profile() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    test.sign_in_as(uuid::Uuid::new_v4()).await;

    let result = get_me(State(test.into_app_state()), test.session.clone()).await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    let again = get_me(State(test.into_app_state()), test.session.clone()).await;
    assert_eq!(into_response(again).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
