//! Requests routed through the full router with an in-memory session layer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jobboard::server::router::routes;
use jobboard_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::TestContextExt;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect `/api/jobs/mine` to reach its own handler rather than the job ID route
#[tokio::test]
async fn routes_own_jobs_before_job_id() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;

    let resp = app(&test)
        .oneshot(Request::get("/api/jobs/mine").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the public job listing to answer anonymous requests
#[tokio::test]
async fn lists_jobs_anonymously() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let recruiter = test.profile().insert_recruiter().await?;
    test.job().insert_open_job(recruiter.id).await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/jobs?search=backend")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let jobs: Vec<jobboard::model::job::JobDto> = crate::util::read_json(resp).await;
    assert_eq!(jobs.len(), 1);

    Ok(())
}
