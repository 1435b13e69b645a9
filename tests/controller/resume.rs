use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use jobboard::{
    model::resume::ResumeDto,
    server::controller::resume::{get_resume, upload_resume},
};

use super::*;

fn pdf_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );

    headers
}

/// Expect an uploaded resume to be served back to its owner with its content type
#[tokio::test]
async fn upload_then_download() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let seeker = test.profile().insert_job_seeker().await?;
    test.sign_in_as(seeker.id).await;

    let uploaded = upload_resume(
        State(test.into_app_state()),
        test.session.clone(),
        pdf_headers(),
        Bytes::from_static(b"%PDF-1.7 resume"),
    )
    .await;
    let resp = into_response(uploaded);
    assert_eq!(resp.status(), StatusCode::OK);
    let resume: ResumeDto = read_json(resp).await;
    assert!(resume.url.ends_with(&format!("/api/storage/resumes/{}", seeker.id)));
    assert_eq!(resume.content_type, "application/pdf");

    let downloaded = get_resume(
        State(test.into_app_state()),
        test.session.clone(),
        Path(seeker.id),
    )
    .await;
    let resp = into_response(downloaded);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"%PDF-1.7 resume");

    Ok(())
}

/// Expect 400 for an empty body
#[tokio::test]
async fn upload_rejects_empty_body() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let seeker = test.profile().insert_job_seeker().await?;
    test.sign_in_as(seeker.id).await;

    let result = upload_resume(
        State(test.into_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when downloading without signing in
#[tokio::test]
async fn download_requires_sign_in() -> Result<(), TestError> {
    let test = test_setup_with_job_board_tables!()?;
    let seeker = test.profile().insert_job_seeker().await?;

    let result = get_resume(
        State(test.into_app_state()),
        test.session.clone(),
        Path(seeker.id),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
