use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, caller::Caller, db::UserModel, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves the user ID from session and then the user from the database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserModel)`: The logged in user
/// - `Err(AuthError::UserNotInSession)`: User ID not present in session
/// - `Err(AuthError::UserNotInDatabase)`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_session_user(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session for user, they will need to log in again",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

/// Resolves the [`Caller`] of a request, see [`get_session_user`] for the possible errors
pub async fn get_caller(state: &AppState, session: &Session) -> Result<Caller, Error> {
    let user = get_session_user(state, session).await?;

    Ok(Caller::from(&user))
}
