use super::*;

/// Tests writing publisher changes back to storage.
///
/// Expected: Ok with address replaced and name unchanged
#[tokio::test]
async fn updates_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_publisher(db).await?;
    let repo = PublisherRepository::new(db);

    let mut publisher = repo.get_by_id(created.id).await?.unwrap();
    publisher.address = Some("Busan".to_string());
    repo.update(publisher).await?;

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.address.as_deref(), Some("Busan"));
    assert_eq!(stored.name, created.name);

    Ok(())
}
