use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing required configuration value: {0}")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unrecognized dice notation: {0}")]
    Unrecognized(String),
    #[error("number out of range in dice notation: {0}")]
    OutOfRange(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("bad signature")]
    Verification,
    #[error("invalid interaction payload: {0}")]
    Validation(String),
    #[error("failed to hand off interaction: {0}")]
    Invocation(String),
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        match self {
            InteractionError::Verification => {
                (StatusCode::UNAUTHORIZED, "bad signature").into_response()
            }
            InteractionError::Validation(message) => {
                tracing::error!("Failed to deserialize incoming payload: {}", &message);
                StatusCode::BAD_REQUEST.into_response()
            }
            InteractionError::Invocation(message) => {
                tracing::error!("Failed to schedule command execution: {}", &message);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
