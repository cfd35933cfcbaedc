use super::*;

/// Expect audits and findings of a deleted item to be removed with it
#[tokio::test]
async fn cascades_to_audits_and_findings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (user, team) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login", None).await?;
    let other = test.item().insert_item(project.id, "Signup", None).await?;

    let audit = test
        .audit()
        .insert_audit(item.id, user.id, AuditStatus::Fail, day(0))
        .await?;
    test.audit()
        .insert_finding(audit.id, FindingSeverity::High)
        .await?;
    let other_audit = test
        .audit()
        .insert_audit(other.id, user.id, AuditStatus::Pass, day(1))
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    let result = item_repo.delete(item.id).await?;

    assert_eq!(result.rows_affected, 1);

    let audits = entity::prelude::Audit::find().all(&test.db).await?;
    let audit_ids: Vec<i32> = audits.iter().map(|a| a.id).collect();
    assert_eq!(audit_ids, vec![other_audit.id]);

    let findings = entity::prelude::Finding::find().all(&test.db).await?;
    assert!(findings.is_empty());

    Ok(())
}

/// Expect no rows to be affected when deleting an item that does not exist
#[tokio::test]
async fn affects_no_rows_for_nonexistent_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let item_repo = ItemRepository::new(&test.db);
    let result = item_repo.delete(1).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
