use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserDto},
    },
    server::{
        controller::util::get_caller::{get_caller, get_session_user},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving the current user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Update the logged in user's name, email or image
#[utoipa::path(
    patch,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Success when updating the current user", body = UserDto),
        (status = 400, description = "Name or email is empty", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let user = UserService::new(&state.db)
        .update_user(&caller, payload)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
