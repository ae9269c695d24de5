use super::*;

/// Tests deleting a book without a detail.
///
/// Expected: Ok with book removed
#[tokio::test]
async fn deletes_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let repo = BookRepository::new(db);

    repo.delete(book.id).await?;

    assert!(repo.get_by_id(book.id).await?.is_none());

    Ok(())
}

/// Tests that storage refuses to delete a book whose detail still exists.
///
/// Expected: Err, with both the book and its detail still stored
#[tokio::test]
async fn storage_restricts_delete_with_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let detail = factory::create_book_detail(db, book.id).await?;
    let repo = BookRepository::new(db);

    let result = repo.delete(book.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(book.id).await?.is_some());
    let stored = BookDetailRepository::new(db)
        .get_by_book_id(book.id)
        .await?
        .unwrap();
    assert_eq!(stored.id, detail.id);

    Ok(())
}
