use super::*;

/// Expect only provided fields to change
#[tokio::test]
async fn updates_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;
    let website = test.project().insert_project(team.id, "Website").await?;
    let api = test.project().insert_project(team.id, "API").await?;
    let item = test
        .item()
        .insert_item(website.id, "Login", Some((7, FrequencyUnit::Day)))
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    let result = item_repo
        .update(
            item.id,
            ItemUpdate {
                project_id: Some(api.id),
                name: Some("Sign in".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.project_id, api.id);
    assert_eq!(updated.name, "Sign in");
    assert_eq!(updated.frequency_value, Some(7));
    assert_eq!(updated.frequency_unit, Some(FrequencyUnit::Day));

    Ok(())
}

/// Expect a cleared schedule to null both frequency columns
#[tokio::test]
async fn clears_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;
    let item = test
        .item()
        .insert_item(project.id, "Login", Some((1, FrequencyUnit::Month)))
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    let updated = item_repo
        .update(
            item.id,
            ItemUpdate {
                schedule: Some(Schedule::NoSchedule),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.frequency_value, None);
    assert_eq!(updated.frequency_unit, None);

    Ok(())
}

/// Expect None for an item ID that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let item_repo = ItemRepository::new(&test.db);
    let result = item_repo.update(1, ItemUpdate::default()).await?;

    assert!(result.is_none());

    Ok(())
}
