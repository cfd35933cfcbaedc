use super::*;

/// Expect only items of the team's projects, oldest first
#[tokio::test]
async fn returns_team_items_oldest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let acme = test.team().insert_team("Acme").await?;
    let globex = test.team().insert_team("Globex").await?;
    let website = test.project().insert_project(acme.id, "Website").await?;
    let api = test.project().insert_project(acme.id, "API").await?;
    let reactor = test.project().insert_project(globex.id, "Reactor").await?;

    let login = test.item().insert_item(website.id, "Login", None).await?;
    test.item().insert_item(reactor.id, "Core", None).await?;
    let tokens = test.item().insert_item(api.id, "Tokens", None).await?;

    let item_repo = ItemRepository::new(&test.db);
    let items = item_repo.get_by_team(acme.id, None).await?;

    let item_ids: Vec<i32> = items.iter().map(|(i, _)| i.id).collect();
    assert_eq!(item_ids, vec![login.id, tokens.id]);

    Ok(())
}

/// Expect only items of the requested project
#[tokio::test]
async fn filters_by_project() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let acme = test.team().insert_team("Acme").await?;
    let website = test.project().insert_project(acme.id, "Website").await?;
    let api = test.project().insert_project(acme.id, "API").await?;
    test.item().insert_item(website.id, "Login", None).await?;
    let tokens = test.item().insert_item(api.id, "Tokens", None).await?;

    let item_repo = ItemRepository::new(&test.db);
    let items = item_repo.get_by_team(acme.id, Some(api.id)).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].0.id, tokens.id);
    assert_eq!(items[0].1.as_ref().map(|p| p.team_id), Some(acme.id));

    Ok(())
}

/// Expect no items when the project belongs to another team
#[tokio::test]
async fn returns_empty_for_other_teams_project() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let acme = test.team().insert_team("Acme").await?;
    let globex = test.team().insert_team("Globex").await?;
    let reactor = test.project().insert_project(globex.id, "Reactor").await?;
    test.item().insert_item(reactor.id, "Core", None).await?;

    let item_repo = ItemRepository::new(&test.db);
    let items = item_repo.get_by_team(acme.id, Some(reactor.id)).await?;

    assert!(items.is_empty());

    Ok(())
}
