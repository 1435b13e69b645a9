use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::JobStatus;
use jobboard::{
    model::job::{CreateJobDto, JobDto, JobQuery, UpdateJobDto},
    server::controller::job::{
        create_job, delete_job, get_job, list_jobs, list_own_jobs, update_job,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn create_job_dto() -> CreateJobDto {
    CreateJobDto {
        title: "Site Reliability Engineer".to_string(),
        description: "Keep things running".to_string(),
        company_name: "Hooli".to_string(),
        location: "Lisbon".to_string(),
        job_type: "full_time".to_string(),
        salary_min: None,
        salary_max: None,
        required_skills: vec!["kubernetes".to_string()],
        experience_required: None,
        status: None,
    }
}

/// Expect anonymous listings to contain open jobs only
#[tokio::test]
async fn list_jobs_shows_open_jobs_to_anonymous() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let open = test.job().insert_open_job(recruiter.id).await?;
    test.job().insert_job(recruiter.id, JobStatus::Paused).await?;

    let result = list_jobs(
        State(test.into_app_state()),
        test.session.clone(),
        Query(JobQuery::default()),
    )
    .await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let jobs: Vec<JobDto> = read_json(resp).await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, open.id);

    Ok(())
}

/// Expect the recruiter's own listing to include jobs in every status
#[tokio::test]
async fn list_own_jobs_includes_every_status() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    test.job().insert_open_job(recruiter.id).await?;
    test.job().insert_job(recruiter.id, JobStatus::Closed).await?;
    test.sign_in_as(recruiter.id).await;

    let result = list_own_jobs(State(test.into_app_state()), test.session.clone()).await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let jobs: Vec<JobDto> = read_json(resp).await;
    assert_eq!(jobs.len(), 2);

    Ok(())
}

/// Expect 404 when a non-owner reads a paused job
#[tokio::test]
async fn get_job_hides_paused_job() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let job = test.job().insert_job(recruiter.id, JobStatus::Paused).await?;

    let result = get_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 when a recruiter posts a job
#[tokio::test]
async fn create_job_as_recruiter() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    test.sign_in_as(recruiter.id).await;

    let result = create_job(
        State(test.into_app_state()),
        test.session.clone(),
        Json(create_job_dto()),
    )
    .await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let job: JobDto = read_json(resp).await;
    assert_eq!(job.recruiter_id, recruiter.id);
    assert_eq!(job.status, JobStatus::Open);

    Ok(())
}

/// Expect 403 when a job seeker posts a job and 401 when not signed in
#[tokio::test]
async fn create_job_rejects_non_recruiters() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let anonymous = create_job(
        State(test.into_app_state()),
        test.session.clone(),
        Json(create_job_dto()),
    )
    .await;
    assert_eq!(into_response(anonymous).status(), StatusCode::UNAUTHORIZED);

    let seeker = test.profile().insert_job_seeker().await?;
    test.sign_in_as(seeker.id).await;

    let as_seeker = create_job(
        State(test.into_app_state()),
        test.session.clone(),
        Json(create_job_dto()),
    )
    .await;
    assert_eq!(into_response(as_seeker).status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 when a required field is blank
#[tokio::test]
async fn create_job_rejects_blank_title() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    test.sign_in_as(recruiter.id).await;

    let result = create_job(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CreateJobDto {
            title: " ".to_string(),
            ..create_job_dto()
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 and an unchanged row when another recruiter updates the job
#[tokio::test]
async fn update_job_rejects_foreign_recruiter() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let owner = test.profile().insert_recruiter().await?;
    let other = test.profile().insert_recruiter().await?;
    let job = test.job().insert_open_job(owner.id).await?;
    test.sign_in_as(other.id).await;

    let result = update_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(UpdateJobDto {
            status: Some(JobStatus::Closed),
            ..Default::default()
        }),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Job::find_by_id(job.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, JobStatus::Open);

    Ok(())
}

/// Expect the owner to close their job
#[tokio::test]
async fn update_job_as_owner() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let owner = test.profile().insert_recruiter().await?;
    let job = test.job().insert_open_job(owner.id).await?;
    test.sign_in_as(owner.id).await;

    let result = update_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(UpdateJobDto {
            status: Some(JobStatus::Closed),
            ..Default::default()
        }),
    )
    .await;
    let resp = into_response(result);

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: JobDto = read_json(resp).await;
    assert_eq!(updated.status, JobStatus::Closed);

    Ok(())
}

/// Expect 204 for the owner and 403 for another recruiter
#[tokio::test]
async fn delete_job_only_by_owner() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let owner = test.profile().insert_recruiter().await?;
    let other = test.profile().insert_recruiter().await?;
    let job = test.job().insert_open_job(owner.id).await?;

    test.sign_in_as(other.id).await;
    let as_other = delete_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(as_other).status(), StatusCode::FORBIDDEN);

    test.sign_in_as(owner.id).await;
    let as_owner = delete_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(as_owner).status(), StatusCode::NO_CONTENT);

    let stored = entity::prelude::Job::find_by_id(job.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}
