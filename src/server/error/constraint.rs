use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

/// Violations of the schema's integrity rules or of field validation.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// A unique constraint rejected the row.
    #[error("Duplicate row: {0}")]
    Duplicate(String),
    /// The caller already has an application for this job.
    #[error("Already applied to job {job_id}")]
    AlreadyApplied { job_id: Uuid },
    /// A foreign key references a row that does not exist.
    #[error("Referenced row does not exist: {0}")]
    MissingReference(String),
    /// A field failed validation before reaching the database.
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConstraintError {
    /// Classify a database error, returning it unchanged when it is not a constraint violation.
    pub fn from_db_err(err: DbErr) -> Result<Self, DbErr> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Ok(Self::Duplicate(message)),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Ok(Self::MissingReference(message))
            }
            _ => Err(err),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ConstraintError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            // Database messages name tables and indexes, keep them out of responses
            Self::Duplicate(_) => error_response(StatusCode::CONFLICT, "Resource already exists"),
            Self::AlreadyApplied { .. } => error_response(
                StatusCode::CONFLICT,
                "You have already applied to this job",
            ),
            Self::MissingReference(_) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Referenced resource does not exist",
            ),
            Self::Invalid { .. } => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
