use super::*;

/// Expect Ok with the created project owned by the team
#[tokio::test]
async fn creates_project() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;

    let project_repo = ProjectRepository::new(&test.db);
    let result = project_repo.create(team.id, "Website".to_string()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let project = result.unwrap();
    assert_eq!(project.team_id, team.id);
    assert_eq!(project.name, "Website");

    Ok(())
}

/// Expect Error when the team does not exist
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let project_repo = ProjectRepository::new(&test.db);
    let result = project_repo.create(1, "Website".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
