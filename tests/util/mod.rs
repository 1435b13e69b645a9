//! Helpers for driving handlers directly in integration tests.

use axum::{body::to_bytes, response::Response};
use jobboard::server::{model::app::AppState, model::session::identity::SessionIdentityId};
use jobboard_test_utils::TestContext;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Extension trait building server state from a [`TestContext`]
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Store the identity in the test session as if it had signed in
    async fn sign_in_as(&self, identity_id: Uuid);
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    async fn sign_in_as(&self, identity_id: Uuid) {
        SessionIdentityId::insert(&self.session, identity_id)
            .await
            .unwrap();
    }
}

/// Read and deserialize a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Collapse a handler result into its HTTP response
pub fn into_response<T: axum::response::IntoResponse>(
    result: Result<T, jobboard::server::error::Error>,
) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(err) => axum::response::IntoResponse::into_response(err),
    }
}
