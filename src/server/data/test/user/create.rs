use super::*;

/// Tests creating a user.
///
/// Expected: Ok with user persisted, stamped and findable by email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Park".to_string(),
            email: "park@example.com".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_email("park@example.com").await?, Some(user.clone()));
    assert_eq!(repo.get_by_id(user.id).await?, Some(user));
    assert!(repo.exists_by_email("park@example.com").await?);

    Ok(())
}
