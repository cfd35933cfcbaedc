use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Name of a team, project, item or user is empty after trimming whitespace
    #[error("The {0} name must not be empty")]
    EmptyName(&'static str),
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Frequency value must not be negative, got {0}")]
    NegativeFrequency(i32),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
