use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        project::{CreateProjectDto, ProjectDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::project::ProjectService,
    },
};

pub static PROJECT_TAG: &str = "project";

/// List projects of the logged in user's team
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "Success when retrieving projects", body = Vec<ProjectDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let projects = ProjectService::new(&state.db).get_projects(&caller).await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Create a project for the logged in user's team
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Project name is empty", body = ErrorDto),
        (status = 404, description = "User or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let project = ProjectService::new(&state.db)
        .create_project(&caller, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}
