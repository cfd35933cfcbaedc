use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vigil::{
    model::team::{CreateTeamDto, TeamDto},
    server::controller::team::{create_team, get_teams},
};

use super::*;

/// Expect 201 and the creator to see exactly the new team afterwards
#[tokio::test]
async fn creates_team_and_joins_it() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let user = test.user().insert_user("Alice", None).await?;
    login(&test, user.id).await;

    let payload = CreateTeamDto {
        name: "Acme".to_string(),
    };
    let result = create_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TeamDto = read_json(resp).await;

    let result = get_teams(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let teams: Vec<TeamDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(teams, vec![created]);

    Ok(())
}

/// Expect 400 for an empty team name
#[tokio::test]
async fn bad_request_for_empty_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let user = test.user().insert_user("Alice", None).await?;
    login(&test, user.id).await;

    let payload = CreateTeamDto {
        name: " ".to_string(),
    };
    let result = create_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when no user is logged in
#[tokio::test]
async fn not_found_when_user_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let payload = CreateTeamDto {
        name: "Acme".to_string(),
    };
    let result = create_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
