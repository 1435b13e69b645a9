use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity ID is not present in session")]
    IdentityNotInSession,
    #[error("Identity ID {0} not found in database despite having an active session")]
    IdentityNotInDatabase(Uuid),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::IdentityNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::IdentityNotInDatabase(identity_id) => {
                tracing::debug!(identity_id = %identity_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::EmailTaken => error_response(StatusCode::CONFLICT, self.to_string()),
        }
    }
}
