use super::*;

/// Expect the schedule to be stored as frequency columns
#[tokio::test]
async fn stores_schedule_columns() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;

    let item_repo = ItemRepository::new(&test.db);
    let item = item_repo
        .create(
            project.id,
            "Login page".to_string(),
            Some("Check the login form".to_string()),
            &every(7, ScheduleUnit::Day),
        )
        .await?;

    assert_eq!(item.project_id, project.id);
    assert_eq!(item.frequency_value, Some(7));
    assert_eq!(item.frequency_unit, Some(FrequencyUnit::Day));
    assert_eq!(item.description.as_deref(), Some("Check the login form"));

    Ok(())
}

/// Expect null frequency columns without a schedule
#[tokio::test]
async fn stores_no_schedule_as_null() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;

    let item_repo = ItemRepository::new(&test.db);
    let item = item_repo
        .create(
            project.id,
            "Login page".to_string(),
            None,
            &Schedule::NoSchedule,
        )
        .await?;

    assert_eq!(item.frequency_value, None);
    assert_eq!(item.frequency_unit, None);

    Ok(())
}
