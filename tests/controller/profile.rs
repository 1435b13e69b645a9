use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use jobboard::{
    model::profile::{ProfileDto, UpdateProfileDto},
    server::controller::profile::{get_profile, update_own_profile},
};
use uuid::Uuid;

use super::*;

/// Expect 200 for an existing profile, readable without signing in
#[tokio::test]
async fn get_profile_returns_profile() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let profile = test.profile().insert_recruiter().await?;

    let result = get_profile(State(test.into_app_state()), Path(profile.id)).await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let dto: ProfileDto = read_json(resp).await;
    assert_eq!(dto.role, UserRole::Recruiter);

    Ok(())
}

/// Expect 404 for a profile that does not exist
#[tokio::test]
async fn get_profile_not_found() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = get_profile(State(test.into_app_state()), Path(Uuid::new_v4())).await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the changes applied for the signed in caller
#[tokio::test]
async fn update_own_profile_applies_changes() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let profile = test.profile().insert_job_seeker().await?;
    test.sign_in_as(profile.id).await;

    let result = update_own_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            bio: Some("Compilers".to_string()),
            skills: Some(vec!["rust".to_string()]),
            experience_years: Some(4),
            ..Default::default()
        }),
    )
    .await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let dto: ProfileDto = read_json(resp).await;
    assert_eq!(dto.bio.as_deref(), Some("Compilers"));
    assert_eq!(dto.skills, Some(vec!["rust".to_string()]));
    assert_eq!(dto.experience_years, Some(4));

    Ok(())
}

/// Expect 401 when not signed in
#[tokio::test]
async fn update_own_profile_requires_sign_in() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = update_own_profile(
        State(test.into_app_state()),
        test.session.clone(),
        Json(UpdateProfileDto::default()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
