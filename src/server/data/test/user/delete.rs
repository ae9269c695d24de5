use super::*;

/// Tests deleting a user.
///
/// Expected: Ok with user removed from listings
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_user(db).await?;
    let removed = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.delete(removed.id).await?;

    let ids: Vec<i32> = repo.get_all().await?.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}
