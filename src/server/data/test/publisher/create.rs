use super::*;

/// Tests creating a publisher with every optional field.
///
/// Expected: Ok with publisher persisted and findable by name
#[tokio::test]
async fn creates_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PublisherRepository::new(db);
    let publisher = repo
        .create(CreatePublisherParam {
            name: "Hanbit Media".to_string(),
            established_date: NaiveDate::from_ymd_opt(1993, 6, 1),
            address: Some("Seoul".to_string()),
        })
        .await?;

    assert_eq!(publisher.address.as_deref(), Some("Seoul"));
    assert_eq!(repo.find_by_name("Hanbit Media").await?, Some(publisher));
    assert!(repo.exists_by_name("Hanbit Media").await?);
    assert!(!repo.exists_by_name("O'Reilly").await?);

    Ok(())
}
