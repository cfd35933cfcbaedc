use super::*;

/// Expect the audit to keep the provided timestamp
#[tokio::test]
async fn creates_audit_at_provided_time() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (user, team) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login", None).await?;

    let audit_repo = AuditRepository::new(&test.db);
    let audit = audit_repo
        .create(
            item.id,
            user.id,
            AuditStatus::Pass,
            Some("All good".to_string()),
            day(3),
        )
        .await?;

    assert_eq!(audit.item_id, item.id);
    assert_eq!(audit.user_id, user.id);
    assert_eq!(audit.status, AuditStatus::Pass);
    assert_eq!(audit.created_at, day(3));

    Ok(())
}

/// Expect Error when the item does not exist
#[tokio::test]
async fn fails_for_nonexistent_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let user = test.user().insert_user("Alice", None).await?;

    let audit_repo = AuditRepository::new(&test.db);
    let result = audit_repo
        .create(1, user.id, AuditStatus::Fail, None, day(0))
        .await;

    assert!(result.is_err());

    Ok(())
}
