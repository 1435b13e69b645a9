//! Error types for the job board server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse` mapping, aggregated
//! into [`Error`] so handlers and services can propagate with `?`. Database errors are
//! classified on conversion: constraint violations become [`ConstraintError`] variants
//! while everything else stays a generic database failure.

pub mod auth;
pub mod config;
pub mod constraint;
pub mod policy;
pub mod retry;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, constraint::ConstraintError, policy::PolicyError,
        storage::StorageError,
    },
};

/// Main error type for the job board server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, sign-up conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Uniqueness, foreign key or field validation failure.
    #[error(transparent)]
    ConstraintError(#[from] ConstraintError),
    /// Caller is not permitted to perform the operation on the row.
    #[error(transparent)]
    PolicyError(#[from] PolicyError),
    /// Object store failure.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// The requested resource does not exist or is not visible to the caller.
    #[error("{0} not found")]
    NotFound(String),
    /// Failed to parse a value from a string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error other than a constraint violation.
    #[error(transparent)]
    DbErr(DbErr),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Socket bind or serve failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match ConstraintError::from_db_err(err) {
            Ok(constraint_error) => Self::ConstraintError(constraint_error),
            Err(err) => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid fields or object path
/// - 401 Unauthorized - Anonymous caller, invalid credentials
/// - 403 Forbidden - Policy rejection
/// - 404 Not Found - Missing or invisible resource
/// - 409 Conflict - Duplicate row, already applied, email taken
/// - 413 Payload Too Large - Upload exceeds the object size limit
/// - 422 Unprocessable Entity - Reference to a row that does not exist
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ConstraintError(err) => err.into_response(),
            Self::PolicyError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::NotFound(resource) => {
                tracing::debug!("{} not found", resource);

                error_response(StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
