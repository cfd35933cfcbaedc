use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Invalid server environment, raised by `Config::from_env` before the server starts
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` or `VALKEY_URL` is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An optional variable is set but cannot be parsed, e.g. `BIND_ADDRESS=localhost`
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Configuration never depends on the request, so it surfaces as a generic 500
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
