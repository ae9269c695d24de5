use super::*;

/// Tests the title substring search.
///
/// Expected: Ok with only the books whose title contains the fragment
#[tokio::test]
async fn finds_books_by_title_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rust = factory::book::BookFactory::new(db)
        .title("The Rust Programming Language")
        .build()
        .await?;
    let async_rust = factory::book::BookFactory::new(db)
        .title("Asynchronous Programming in Rust")
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Database Internals")
        .build()
        .await?;

    let found: Vec<i32> = BookRepository::new(db)
        .search_by_title("Rust")
        .await?
        .iter()
        .map(|b| b.id)
        .collect();

    assert_eq!(found, vec![rust.id, async_rust.id]);

    Ok(())
}
