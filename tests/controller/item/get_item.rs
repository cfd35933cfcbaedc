use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use vigil::{model::item::ItemDetailDto, server::controller::item::get_item};

use super::*;

/// Expect 200 with "No due date" for an item that was never audited
#[tokio::test]
async fn returns_item_without_audits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(acme.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login form", None).await?;
    login(&test, alice.id).await;

    let result = get_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(item.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ItemDetailDto = read_json(resp).await;
    assert_eq!(body.id, item.id);
    assert_eq!(body.due.label, "No due date");
    assert!(body.audits.is_empty());

    Ok(())
}

/// Expect 404 for another team's item
#[tokio::test]
async fn not_found_for_other_team_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, _) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let (_, globex) = test.user().insert_user_with_team("Carol", "Globex").await?;
    let payroll = test.project().insert_project(globex.id, "Payroll").await?;
    let item = test.item().insert_item(payroll.id, "Export", None).await?;
    login(&test, alice.id).await;

    let result = get_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(item.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
