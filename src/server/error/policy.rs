use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::error_response,
    policy::{EntityKind, Operation},
};

/// Rejection by the access policy layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// An anonymous caller attempted an operation requiring an identity.
    #[error("Anonymous caller may not {operation} {entity}")]
    Unauthenticated {
        entity: EntityKind,
        operation: Operation,
    },
    /// The caller's identity or role does not satisfy the rule for the row.
    #[error("Caller may not {operation} {entity}")]
    Denied {
        entity: EntityKind,
        operation: Operation,
    },
}

impl IntoResponse for PolicyError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated { .. } => {
                error_response(StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::Denied { entity, operation } => error_response(
                StatusCode::FORBIDDEN,
                format!("You are not allowed to {} this {}", operation, entity),
            ),
        }
    }
}
