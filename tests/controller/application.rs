use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use jobboard::{
    model::application::{
        ApplicantDto, ApplicationDto, ApplicationWithJobDto, ApplyDto, UpdateApplicationStatusDto,
    },
    server::controller::application::{
        apply, list_job_applications, list_own_applications, update_application_status,
    },
};

use super::*;

/// Expect 201 for the first application and 409 for the second
#[tokio::test]
async fn apply_rejects_duplicate() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;
    test.sign_in_as(seeker.id).await;

    let first = apply(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(ApplyDto::default()),
    )
    .await;
    let resp = into_response(first);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let application: ApplicationDto = read_json(resp).await;
    assert_eq!(application.status, ApplicationStatus::Applied);

    let second = apply(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(ApplyDto::default()),
    )
    .await;
    assert_eq!(into_response(second).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 401 when applying without signing in
#[tokio::test]
async fn apply_requires_sign_in() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;

    let result = apply(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(ApplyDto::default()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the applicant's listing to include the job applied to
#[tokio::test]
async fn list_own_applications_includes_job() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;
    test.application()
        .insert_application(job.id, seeker.id)
        .await?;
    test.sign_in_as(seeker.id).await;

    let result = list_own_applications(State(test.into_app_state()), test.session.clone()).await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let applications: Vec<ApplicationWithJobDto> = read_json(resp).await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].job.as_ref().map(|job| job.id), Some(job.id));

    Ok(())
}

/// Expect the job owner to see the applicant's profile
#[tokio::test]
async fn list_job_applications_for_owner() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;
    test.application()
        .insert_application(job.id, seeker.id)
        .await?;
    test.sign_in_as(recruiter.id).await;

    let result = list_job_applications(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let applicants: Vec<ApplicantDto> = read_json(resp).await;
    assert_eq!(applicants.len(), 1);
    assert_eq!(
        applicants[0].applicant.as_ref().map(|profile| profile.id),
        Some(seeker.id)
    );

    Ok(())
}

/// Expect 403 when the applicant changes their own status
#[tokio::test]
async fn update_status_rejects_applicant() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;
    let application = test
        .application()
        .insert_application(job.id, seeker.id)
        .await?;
    test.sign_in_as(seeker.id).await;

    let result = update_application_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(application.id),
        Json(UpdateApplicationStatusDto {
            status: ApplicationStatus::Hired,
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}
