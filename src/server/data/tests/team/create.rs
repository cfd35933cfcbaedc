use super::*;

/// Expect Ok with the created team
#[tokio::test]
async fn creates_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.create("Acme".to_string()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let team = result.unwrap();
    assert_eq!(team.name, "Acme");

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.create("Acme".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
