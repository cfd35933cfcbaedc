use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of the team membership gate.
///
/// Entities owned by another team are reported exactly like entities that do not exist so the
/// response never reveals data belonging to another tenant.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("User is not in a team")]
    NotInTeam,
    #[error("Team ID {0:?} not found for the current user")]
    TeamNotFound(i32),
    #[error("Project ID {0:?} not found for the current user")]
    ProjectNotFound(i32),
    #[error("Item ID {0:?} not found for the current user")]
    ItemNotFound(i32),
    #[error("Audit ID {0:?} not found for the current user")]
    AuditNotFound(i32),
    #[error("User ID {0:?} is not a member of the current user's team")]
    MemberNotFound(i32),
    #[error("No user found with email {0:?}")]
    EmailNotFound(String),
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotInTeam => error_response(StatusCode::BAD_REQUEST, "User is not in a team"),
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "Team not found"),
            Self::ProjectNotFound(_) => error_response(StatusCode::NOT_FOUND, "Project not found"),
            Self::ItemNotFound(_) => error_response(StatusCode::NOT_FOUND, "Item not found"),
            Self::AuditNotFound(_) => error_response(StatusCode::NOT_FOUND, "Audit not found"),
            Self::MemberNotFound(_) | Self::EmailNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "User not found")
            }
        }
    }
}
