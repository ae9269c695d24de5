use super::*;

/// Tests counting books per publisher.
///
/// Expected: Ok with 2 for the publisher with books and 0 for the other
#[tokio::test]
async fn counts_books_of_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _) = factory::helpers::create_book_with_publisher(db).await?;
    factory::book::BookFactory::new(db)
        .publisher_id(Some(publisher.id))
        .build()
        .await?;
    let empty = factory::create_publisher(db).await?;
    factory::create_book(db).await?;

    let repo = PublisherRepository::new(db);

    assert_eq!(repo.count_books(publisher.id).await?, 2);
    assert_eq!(repo.count_books(empty.id).await?, 0);

    Ok(())
}
