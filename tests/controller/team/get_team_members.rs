use axum::{extract::State, http::StatusCode, response::IntoResponse};
use vigil::{model::user::UserDto, server::controller::team::get_team_members};

use super::*;

/// Expect 200 listing only members of the caller's team
#[tokio::test]
async fn lists_members_of_own_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, team) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let bob = test.user().insert_user("Bob", Some(team.id)).await?;
    test.user().insert_user_with_team("Carol", "Globex").await?;
    test.user().insert_user("Dave", None).await?;
    login(&test, alice.id).await;

    let result = get_team_members(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let members: Vec<UserDto> = read_json(resp).await;
    let ids: Vec<i32> = members.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![alice.id, bob.id]);

    Ok(())
}

/// Expect 200 with an empty list for a user without a team
#[tokio::test]
async fn empty_for_user_without_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let dave = test.user().insert_user("Dave", None).await?;
    login(&test, dave.id).await;

    let result = get_team_members(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let members: Vec<UserDto> = read_json(result.unwrap().into_response()).await;
    assert!(members.is_empty());

    Ok(())
}
