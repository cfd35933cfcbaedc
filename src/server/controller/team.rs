use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team::{AddTeamMemberDto, CreateTeamDto, TeamDto},
        user::UserDto,
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "team";

/// List the teams the logged in user belongs to
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Success when retrieving teams", body = Vec<TeamDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let teams = TeamService::new(&state.db).get_teams(&caller).await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Create a team and join it
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created, the user is now a member", body = TeamDto),
        (status = 400, description = "Team name is empty", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let team = TeamService::new(&state.db)
        .create_team(&caller, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// Add a user to the logged in user's team by email
#[utoipa::path(
    post,
    path = "/api/teams/members",
    tag = TEAM_TAG,
    request_body = AddTeamMemberDto,
    responses(
        (status = 200, description = "User added to the team", body = UserDto),
        (status = 400, description = "User is not in a team or email is empty", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddTeamMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let user = TeamService::new(&state.db)
        .add_member(&caller, payload)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// List members of the logged in user's team
#[utoipa::path(
    get,
    path = "/api/teams/members",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Success when retrieving team members", body = Vec<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let members = TeamService::new(&state.db).get_members(&caller).await?;

    Ok((StatusCode::OK, Json(members)))
}
