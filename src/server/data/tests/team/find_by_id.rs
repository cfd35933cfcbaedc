use super::*;

/// Expect Some for an existing team
#[tokio::test]
async fn finds_existing_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.find_by_id(team.id).await?;

    assert_eq!(result, Some(team));

    Ok(())
}

/// Expect None for a team ID that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.find_by_id(1).await?;

    assert!(result.is_none());

    Ok(())
}
