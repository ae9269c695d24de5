use super::*;

/// Tests renaming a user by email.
///
/// Verifies only the name changes; the creation timestamp is preserved.
///
/// Expected: Ok(Some) with new name
#[tokio::test]
async fn renames_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_name(&created.email, "Renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests renaming with an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_name("missing@example.com", "Anyone".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
