use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        audit::{CreateFindingDto, FindingDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::finding::FindingService,
    },
};

pub static FINDING_TAG: &str = "finding";

/// Record a finding against an audit
#[utoipa::path(
    post,
    path = "/api/findings",
    tag = FINDING_TAG,
    request_body = CreateFindingDto,
    responses(
        (status = 201, description = "Finding recorded", body = FindingDto),
        (status = 404, description = "User or audit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_finding(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFindingDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let finding = FindingService::new(&state.db)
        .create_finding(&caller, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(finding)))
}
