use super::*;

/// Tests deleting a book's detail by owner id.
///
/// Expected: Ok(1) and the detail is gone
#[tokio::test]
async fn deletes_detail_of_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    factory::create_book_detail(db, book.id).await?;
    let repo = BookDetailRepository::new(db);

    assert_eq!(repo.delete_by_book_id(book.id).await?, 1);
    assert!(repo.get_by_book_id(book.id).await?.is_none());

    Ok(())
}
