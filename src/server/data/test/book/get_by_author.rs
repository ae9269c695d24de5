use super::*;

/// Tests non-unique lookups by author and by publisher.
///
/// Expected: Ok with matching books in insertion order
#[tokio::test]
async fn lists_books_by_author_and_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let first = factory::book::BookFactory::new(db)
        .author("Author A")
        .publisher_id(Some(publisher.id))
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .author("Author B")
        .build()
        .await?;
    let third = factory::book::BookFactory::new(db)
        .author("Author A")
        .build()
        .await?;

    let repo = BookRepository::new(db);

    let by_author: Vec<i32> = repo
        .get_by_author("Author A")
        .await?
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(by_author, vec![first.id, third.id]);

    let by_publisher: Vec<i32> = repo
        .get_by_publisher_id(publisher.id)
        .await?
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(by_publisher, vec![first.id]);

    assert!(repo.get_by_author("Nobody").await?.is_empty());

    Ok(())
}
