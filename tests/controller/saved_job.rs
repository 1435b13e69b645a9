use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use jobboard::{
    model::saved_job::SavedJobDto,
    server::controller::saved_job::{list_saved_jobs, remove_saved_job, save_job},
};

use super::*;

/// Expect save, duplicate save, list, remove and second remove to behave in turn
#[tokio::test]
async fn save_and_remove_round() -> Result<(), TestError> {
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

    let duplicate = save_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(duplicate).status(), StatusCode::CONFLICT);

    let listed = into_response(
        list_saved_jobs(State(test.into_app_state()), test.session.clone()).await,
    );
    assert_eq!(listed.status(), StatusCode::OK);
    let listed: Vec<SavedJobDto> = read_json(listed).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].job_id, job.id);

    let removed = remove_saved_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(removed).status(), StatusCode::NO_CONTENT);

    let removed_again = remove_saved_job(
        State(test.into_app_state()),
        test.session.clone(),
        Path(job.id),
    )
    .await;
    assert_eq!(into_response(removed_again).status(), StatusCode::NOT_FOUND);

    let listed = into_response(
        list_saved_jobs(State(test.into_app_state()), test.session.clone()).await,
    );
    let listed: Vec<SavedJobDto> = read_json(listed).await;
    assert!(listed.is_empty());

    Ok(())
}

/// Expect 401 when listing without signing in
#[tokio::test]
async fn list_requires_sign_in() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let result = list_saved_jobs(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
