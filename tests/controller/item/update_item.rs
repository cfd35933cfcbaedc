use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::FrequencyUnit as ScheduleUnit;
use vigil::{
    model::item::{FrequencyDto, FrequencyUnit, ItemDto, UpdateItemDto},
    server::controller::item::update_item,
};

use super::*;

/// Expect 200 with the item renamed and its schedule cleared by a frequency of 0
#[tokio::test]
async fn renames_and_clears_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(acme.id, "Website").await?;
    let item = test
        .item()
        .insert_item(project.id, "Login form", Some((7, ScheduleUnit::Day)))
        .await?;
    login(&test, alice.id).await;

    let payload = UpdateItemDto {
        name: Some("Sign-in form".to_string()),
        frequency: Some(FrequencyDto {
            value: 0,
            unit: FrequencyUnit::Day,
        }),
        ..Default::default()
    };
    let result = update_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(item.id),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ItemDto = read_json(resp).await;
    assert_eq!(body.name, "Sign-in form");
    assert_eq!(body.frequency, None);

    Ok(())
}

/// Expect 404 when moving the item into another team's project
#[tokio::test]
async fn not_found_when_moving_to_other_team_project() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (alice, acme) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let (_, globex) = test.user().insert_user_with_team("Carol", "Globex").await?;
    let website = test.project().insert_project(acme.id, "Website").await?;
    let payroll = test.project().insert_project(globex.id, "Payroll").await?;
    let item = test.item().insert_item(website.id, "Login form", None).await?;
    login(&test, alice.id).await;

    let payload = UpdateItemDto {
        project_id: Some(payroll.id),
        ..Default::default()
    };
    let result = update_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(item.id),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
