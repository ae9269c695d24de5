use super::*;

/// Tests detail lookups by email and phone number.
///
/// Expected: Some for stored values, None otherwise
#[tokio::test]
async fn finds_detail_by_unique_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db, None).await?;
    let detail = factory::student_detail::StudentDetailFactory::new(db, student.id)
        .phone_number("010-4242-4242")
        .email(Some("b@x.com".to_string()))
        .build()
        .await?;

    let repo = StudentDetailRepository::new(db);

    assert_eq!(
        repo.find_by_email("b@x.com").await?.map(|d| d.id),
        Some(detail.id)
    );
    assert_eq!(
        repo.find_by_phone_number("010-4242-4242")
            .await?
            .map(|d| d.id),
        Some(detail.id)
    );
    assert!(repo.find_by_email("c@x.com").await?.is_none());
    assert!(repo.exists_by_email("b@x.com").await?);
    assert!(repo.exists_by_phone_number("010-4242-4242").await?);
    assert!(!repo.exists_by_phone_number("010-0000-0000").await?);

    Ok(())
}
