use super::*;

/// Tests deleting a publisher without books.
///
/// Expected: Ok with publisher removed
#[tokio::test]
async fn deletes_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let repo = PublisherRepository::new(db);

    repo.delete(publisher.id).await?;

    assert!(repo.get_by_id(publisher.id).await?.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
