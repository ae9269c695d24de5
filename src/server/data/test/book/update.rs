use super::*;

/// Tests writing book changes back to storage.
///
/// Expected: Ok with price changed and other fields untouched
#[tokio::test]
async fn updates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_book(db).await?;
    let repo = BookRepository::new(db);

    let mut book = repo.get_by_id(created.id).await?.unwrap();
    book.price = Some(12_000);
    repo.update(book).await?;

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.price, Some(12_000));
    assert_eq!(stored.title, created.title);
    assert_eq!(stored.isbn, created.isbn);

    Ok(())
}
