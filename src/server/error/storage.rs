use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid object path: {0:?}")]
    InvalidPath(String),
    #[error("Object is empty")]
    Empty,
    #[error("Object of {size} bytes exceeds the {max} byte limit")]
    TooLarge { size: usize, max: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPath(_) | Self::Empty => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::TooLarge { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::PAYLOAD_TOO_LARGE, self.to_string())
            }
            Self::Io(_) => InternalServerError(self).into_response(),
        }
    }
}
