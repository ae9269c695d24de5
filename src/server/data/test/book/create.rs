use super::*;

fn new_book(isbn: &str) -> NewBook {
    NewBook {
        title: "Programming Rust".to_string(),
        author: "Jim Blandy".to_string(),
        isbn: isbn.to_string(),
        price: Some(45_000),
        publish_date: None,
        publisher_id: None,
    }
}

/// Tests creating a book.
///
/// Expected: Ok with book persisted and findable by ISBN
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo.create(new_book("978-1")).await?;

    assert_eq!(book.price, Some(45_000));
    assert_eq!(repo.find_by_isbn("978-1").await?, Some(book));
    assert!(repo.exists_by_isbn("978-1").await?);
    assert!(!repo.exists_by_isbn("978-2").await?);

    Ok(())
}

/// Tests the unique index on the ISBN.
///
/// Expected: Err with unique constraint violation, one book stored
#[tokio::test]
async fn rejects_duplicate_isbn_at_storage_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    repo.create(new_book("978-1")).await?;

    let result = repo.create(new_book("978-1")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
