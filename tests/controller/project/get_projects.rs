use axum::{extract::State, http::StatusCode, response::IntoResponse};
use vigil::{model::project::ProjectDto, server::controller::project::get_projects};

use super::*;

/// Expect 200 listing the caller's projects but never another team's
#[tokio::test]
async fn lists_only_own_team_projects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let (_, globex) = test.user().insert_user_with_team("Carol", "Globex").await?;
    let website = test.project().insert_project(acme.id, "Website").await?;
    test.project().insert_project(globex.id, "Payroll").await?;
    login(&test, alice.id).await;

    let result = get_projects(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let projects: Vec<ProjectDto> = read_json(resp).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, website.id);

    Ok(())
}
