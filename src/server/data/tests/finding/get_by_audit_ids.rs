use super::*;

/// Expect findings of the requested audits oldest first
#[tokio::test]
async fn returns_findings_oldest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (user, team) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login", None).await?;
    let audit = test
        .audit()
        .insert_audit(item.id, user.id, AuditStatus::Fail, day(0))
        .await?;
    let other_audit = test
        .audit()
        .insert_audit(item.id, user.id, AuditStatus::Fail, day(1))
        .await?;

    let first = test
        .audit()
        .insert_finding(audit.id, FindingSeverity::Low)
        .await?;
    test.audit()
        .insert_finding(other_audit.id, FindingSeverity::Info)
        .await?;
    let second = test
        .audit()
        .insert_finding(audit.id, FindingSeverity::High)
        .await?;

    let finding_repo = FindingRepository::new(&test.db);
    let findings = finding_repo.get_by_audit_ids(&[audit.id]).await?;

    let finding_ids: Vec<i32> = findings.iter().map(|f| f.id).collect();
    assert_eq!(finding_ids, vec![first.id, second.id]);

    Ok(())
}
