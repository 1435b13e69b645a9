use axum::{extract::State, http::StatusCode, Json};
use entity::sea_orm_active_enums::UserRole;
use jobboard::{
    model::{auth::SignUpDto, profile::ProfileDto},
    server::controller::auth::sign_up,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect each sign-up to yield exactly one profile sharing the identity's ID
#[tokio::test]
async fn every_identity_gets_one_profile() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let named = into_response(
        sign_up(
            State(test.into_app_state()),
            test.session.clone(),
            Json(SignUpDto {
                email: "grace@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
                full_name: Some("Grace Hopper".to_string()),
                role: Some(UserRole::Recruiter),
            }),
        )
        .await,
    );
    assert_eq!(named.status(), StatusCode::CREATED);
    let named: ProfileDto = read_json(named).await;

    let unnamed = into_response(
        sign_up(
            State(test.into_app_state()),
            test.session.clone(),
            Json(SignUpDto {
                email: "anon@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
                full_name: None,
                role: None,
            }),
        )
        .await,
    );
    assert_eq!(unnamed.status(), StatusCode::CREATED);
    let unnamed: ProfileDto = read_json(unnamed).await;

    assert_eq!(named.full_name, "Grace Hopper");
    assert_eq!(named.role, UserRole::Recruiter);
    assert_eq!(unnamed.full_name, "User");
    assert_eq!(unnamed.role, UserRole::JobSeeker);

    assert_eq!(entity::prelude::AuthIdentity::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Profile::find().count(&test.db).await?, 2);
    for profile in [&named, &unnamed] {
        let identity = entity::prelude::AuthIdentity::find_by_id(profile.id)
            .one(&test.db)
            .await?;
        assert!(identity.is_some());
    }

    Ok(())
}
