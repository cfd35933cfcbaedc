use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        audit::{AuditDto, AuditFeedDto, CreateAuditDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::audit::AuditService,
    },
};

pub static AUDIT_TAG: &str = "audit";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditsQuery {
    /// Only list audits of this item
    pub item: Option<i32>,
}

/// List audits of the logged in user's team, newest first
#[utoipa::path(
    get,
    path = "/api/audits",
    tag = AUDIT_TAG,
    params(AuditsQuery),
    responses(
        (status = 200, description = "Success when retrieving audits", body = Vec<AuditFeedDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audits(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuditsQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let audits = AuditService::new(&state.db)
        .get_audits(&caller, query.item)
        .await?;

    Ok((StatusCode::OK, Json(audits)))
}

/// Record an audit of an item
#[utoipa::path(
    post,
    path = "/api/audits",
    tag = AUDIT_TAG,
    request_body = CreateAuditDto,
    responses(
        (status = 201, description = "Audit recorded", body = AuditDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_audit(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAuditDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let audit = AuditService::new(&state.db)
        .create_audit(&caller, payload, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::CREATED, Json(audit)))
}

/// Delete an audit along with its findings
#[utoipa::path(
    delete,
    path = "/api/audits/{id}",
    tag = AUDIT_TAG,
    params(("id" = i32, Path, description = "ID of the audit")),
    responses(
        (status = 204, description = "Audit deleted"),
        (status = 404, description = "User or audit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_audit(
    State(state): State<AppState>,
    session: Session,
    Path(audit_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    AuditService::new(&state.db)
        .delete_audit(&caller, audit_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
