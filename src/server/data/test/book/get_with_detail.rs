use super::*;

/// Tests the book join over detail and publisher.
///
/// Expected: Ok with detail and publisher summary populated
#[tokio::test]
async fn gets_book_with_detail_and_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, book) = factory::helpers::create_book_with_publisher(db).await?;
    let detail = factory::create_book_detail(db, book.id).await?;

    let result = BookRepository::new(db)
        .get_with_detail(book.id)
        .await?
        .unwrap();

    assert_eq!(result.book.isbn, book.isbn);
    let loaded_detail = result.detail.unwrap();
    assert_eq!(loaded_detail.id, detail.id);
    assert_eq!(loaded_detail.page_count, detail.page_count);
    let summary = result.publisher.unwrap();
    assert_eq!(summary.id, publisher.id);
    assert_eq!(summary.name, publisher.name);

    Ok(())
}

/// Tests the join for a book with neither detail nor publisher.
///
/// Expected: Ok with detail and publisher None
#[tokio::test]
async fn gets_bare_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let result = BookRepository::new(db)
        .get_with_detail(book.id)
        .await?
        .unwrap();

    assert!(result.detail.is_none());
    assert!(result.publisher.is_none());

    Ok(())
}
