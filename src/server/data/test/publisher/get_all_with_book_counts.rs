use super::*;

/// Tests the grouped publisher listing.
///
/// Expected: Ok with every publisher and its book count, in insertion order
#[tokio::test]
async fn lists_publishers_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let empty = factory::create_publisher(db).await?;
    let (publisher, _) = factory::helpers::create_book_with_publisher(db).await?;

    let listed = PublisherRepository::new(db)
        .get_all_with_book_counts()
        .await?;

    let counts: Vec<(i32, u64)> = listed
        .iter()
        .map(|p| (p.publisher.id, p.book_count))
        .collect();
    assert_eq!(counts, vec![(empty.id, 0), (publisher.id, 1)]);

    Ok(())
}
