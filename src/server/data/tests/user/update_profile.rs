use super::*;

/// Expect only provided fields to change
#[tokio::test]
async fn updates_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let user = test.user().insert_user("Alice", None).await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo
        .update_profile(
            user.id,
            UserProfileUpdate {
                name: Some("Alice Liddell".to_string()),
                image: Some("https://example.com/alice.png".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Alice Liddell");
    assert_eq!(updated.email, user.email);
    assert_eq!(
        updated.image.as_deref(),
        Some("https://example.com/alice.png")
    );

    Ok(())
}

/// Expect Error when changing email to one already registered
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_vigil_tables().build().await?;
    let user = test.user().insert_user("Alice", None).await?;
    test.user().insert_user("Bob", None).await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo
        .update_profile(
            user.id,
            UserProfileUpdate {
                email: Some("bob@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
