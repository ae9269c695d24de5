use super::*;

/// Tests creating the detail of a book with only some fields set.
///
/// Expected: Ok with unset fields stored as None
#[tokio::test]
async fn creates_partial_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let repo = BookDetailRepository::new(db);

    let detail = repo
        .create(
            book.id,
            BookDetailOptions {
                language: Some("Korean".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(detail.book_id, book.id);
    assert_eq!(detail.language.as_deref(), Some("Korean"));
    assert!(detail.description.is_none());
    assert_eq!(repo.get_by_book_id(book.id).await?, Some(detail));

    Ok(())
}
