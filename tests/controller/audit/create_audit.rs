use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vigil::{
    model::audit::{AuditDto, AuditStatus, CreateAuditDto},
    server::controller::audit::create_audit,
};

use super::*;

/// Expect 201 with the audit attributed to the caller by default
#[tokio::test]
async fn records_audit_for_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(acme.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login form", None).await?;
    login(&test, alice.id).await;

    let payload = CreateAuditDto {
        item_id: item.id,
        status: AuditStatus::Pass,
        date: None,
        notes: Some("All good".to_string()),
        user_id: None,
    };
    let result = create_audit(
        State(test.to_app_state()),
        test.session.clone(),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let audit: AuditDto = read_json(resp).await;
    assert_eq!(audit.item_id, item.id);
    assert_eq!(audit.user_id, alice.id);
    assert_eq!(audit.status, AuditStatus::Pass);

    Ok(())
}

/// Expect 404 when attributing the audit to a user outside the caller's team
#[tokio::test]
async fn not_found_for_user_outside_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let (carol, _) = test.user().insert_user_with_team("Carol", "Globex").await?;
    let project = test.project().insert_project(acme.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login form", None).await?;
    login(&test, alice.id).await;

    let payload = CreateAuditDto {
        item_id: item.id,
        status: AuditStatus::Fail,
        date: None,
        notes: None,
        user_id: Some(carol.id),
    };
    let result = create_audit(
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
