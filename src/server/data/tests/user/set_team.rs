use super::*;

/// Expect the user to be moved into the team
#[tokio::test]
async fn moves_user_into_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;
    let user = test.user().insert_user("Alice", None).await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.set_team(user.id, Some(team.id)).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().team_id, Some(team.id));

    let stored = user_repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.team_id, Some(team.id));

    Ok(())
}

/// Expect None for a user ID that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let team = test.team().insert_team("Acme").await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.set_team(1, Some(team.id)).await?;

    assert!(result.is_none());

    Ok(())
}
