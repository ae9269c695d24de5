use super::*;

/// Tests writing merged detail fields back to storage.
///
/// Expected: Ok with edition replaced and description kept
#[tokio::test]
async fn updates_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let created = factory::create_book_detail(db, book.id).await?;
    let repo = BookDetailRepository::new(db);

    let mut detail = repo.get_by_book_id(book.id).await?.unwrap();
    detail.merge(BookDetailOptions {
        edition: Some("3rd".to_string()),
        ..Default::default()
    });
    repo.update(detail).await?;

    let stored = repo.get_by_book_id(book.id).await?.unwrap();
    assert_eq!(stored.edition.as_deref(), Some("3rd"));
    assert_eq!(stored.description, created.description);

    Ok(())
}
