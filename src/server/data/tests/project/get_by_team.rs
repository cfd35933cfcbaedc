use super::*;

/// Expect only the team's projects, oldest first
#[tokio::test]
async fn returns_team_projects_oldest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let acme = test.team().insert_team("Acme").await?;
    let globex = test.team().insert_team("Globex").await?;
    let website = test.project().insert_project(acme.id, "Website").await?;
    test.project().insert_project(globex.id, "Reactor").await?;
    let api = test.project().insert_project(acme.id, "API").await?;

    let project_repo = ProjectRepository::new(&test.db);
    let projects = project_repo.get_by_team(acme.id).await?;

    let project_ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(project_ids, vec![website.id, api.id]);

    Ok(())
}
