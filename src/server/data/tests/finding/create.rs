use super::*;

/// Expect Ok with the created finding
#[tokio::test]
async fn creates_finding() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let (user, team) = test.user().insert_user_with_team("Alice", "Acme").await?;
    let project = test.project().insert_project(team.id, "Website").await?;
    let item = test.item().insert_item(project.id, "Login", None).await?;
    let audit = test
        .audit()
        .insert_audit(item.id, user.id, AuditStatus::Fail, day(0))
        .await?;

    let finding_repo = FindingRepository::new(&test.db);
    let finding = finding_repo
        .create(
            audit.id,
            FindingSeverity::High,
            "Password sent in clear text".to_string(),
        )
        .await?;

    assert_eq!(finding.audit_id, audit.id);
    assert_eq!(finding.severity, FindingSeverity::High);

    Ok(())
}

/// Expect Error when the audit does not exist
#[tokio::test]
async fn fails_for_nonexistent_audit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;

    let finding_repo = FindingRepository::new(&test.db);
    let result = finding_repo
        .create(1, FindingSeverity::Info, "Note".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
