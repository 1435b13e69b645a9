use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::sea_orm_active_enums::{ApplicationStatus, JobStatus};
use jobboard::{
    model::{
        application::{ApplicationDto, ApplyDto, UpdateApplicationStatusDto},
        job::{CreateJobDto, JobDto, JobQuery},
    },
    server::controller::{
        application::{apply, update_application_status},
        job::{create_job, delete_job, get_job, list_jobs},
        saved_job::save_job,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn job_dto() -> CreateJobDto {
    CreateJobDto {
        title: "Compiler Engineer".to_string(),
        description: "Work on the optimizer".to_string(),
        company_name: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: "full_time".to_string(),
        salary_min: Some(100_000),
        salary_max: Some(140_000),
        required_skills: vec!["rust".to_string(), "llvm".to_string()],
        experience_required: Some(3),
        status: Some(JobStatus::Open),
    }
}

/// Apply, re-apply, shortlist by the owner, then the applicant's own attempt is rejected
#[tokio::test]
async fn apply_and_review() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;

    test.sign_in_as(recruiter.id).await;
    let job = into_response(
        create_job(
            State(test.into_app_state()),
            test.session.clone(),
            Json(job_dto()),
        )
        .await,
    );
    assert_eq!(job.status(), StatusCode::CREATED);
    let job: JobDto = read_json(job).await;

    test.sign_in_as(seeker.id).await;
    let applied = into_response(
        apply(
            State(test.into_app_state()),
            test.session.clone(),
            Path(job.id),
            Json(ApplyDto {
                cover_letter: Some("I like compilers".to_string()),
                resume_url: None,
            }),
        )
        .await,
    );
    assert_eq!(applied.status(), StatusCode::CREATED);
    let application: ApplicationDto = read_json(applied).await;
    assert_eq!(application.status, ApplicationStatus::Applied);

    let reapplied = apply(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(ApplyDto::default()),
    )
    .await;
    assert_eq!(into_response(reapplied).status(), StatusCode::CONFLICT);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    test.sign_in_as(recruiter.id).await;
    let shortlisted = into_response(
        update_application_status(
            State(test.into_app_state()),
            test.session.clone(),
            Path(application.id),
            Json(UpdateApplicationStatusDto {
                status: ApplicationStatus::Shortlisted,
            }),
        )
        .await,
    );
    assert_eq!(shortlisted.status(), StatusCode::OK);
    let shortlisted: ApplicationDto = read_json(shortlisted).await;
    assert_eq!(shortlisted.status, ApplicationStatus::Shortlisted);
    assert!(shortlisted.updated_at > application.updated_at);

    test.sign_in_as(seeker.id).await;
    let self_update = update_application_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(application.id),
        Json(UpdateApplicationStatusDto {
            status: ApplicationStatus::Hired,
        }),
    )
    .await;
    assert_eq!(into_response(self_update).status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Application::find_by_id(application.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Shortlisted);

    let job = into_response(
        get_job(
            State(test.into_app_state()),
            test.session.clone(),
            Path(job.id),
        )
        .await,
    );
    let job: JobDto = read_json(job).await;
    assert_eq!(job.applications_count, 1);
    assert_eq!(job.views_count, 1);

    Ok(())
}

/// Closing a job hides it from everyone but its owner, deleting it removes its dependents
#[tokio::test]
async fn close_then_delete_job() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    let seeker = test.profile().insert_job_seeker().await?;
    let job = test.job().insert_open_job(recruiter.id).await?;

    test.sign_in_as(seeker.id).await;
    let saved = save_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(saved).status(), StatusCode::CREATED);
    let applied = apply(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
        Json(ApplyDto::default()),
    )
    .await;
    assert_eq!(into_response(applied).status(), StatusCode::CREATED);

    let mut job_am: entity::job::ActiveModel = job.clone().into();
    job_am.status = sea_orm::ActiveValue::Set(JobStatus::Closed);
    sea_orm::ActiveModelTrait::update(job_am, &test.db).await?;

    let as_seeker: Vec<JobDto> = read_json(into_response(
        list_jobs(
            State(test.into_app_state()),
            test.session.clone(),
            Query(JobQuery::default()),
        )
        .await,
    ))
    .await;
    assert!(as_seeker.is_empty());

    test.sign_in_as(recruiter.id).await;
    let as_owner: Vec<JobDto> = read_json(into_response(
        list_jobs(
            State(test.into_app_state()),
            test.session.clone(),
            Query(JobQuery::default()),
        )
        .await,
    ))
    .await;
    assert_eq!(as_owner.len(), 1);

    let deleted = delete_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(deleted).status(), StatusCode::NO_CONTENT);

    assert_eq!(
        entity::prelude::Application::find().count(&test.db).await?,
        0
    );
    assert_eq!(entity::prelude::SavedJob::find().count(&test.db).await?, 0);

    Ok(())
}
