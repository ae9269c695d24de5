use super::*;

/// Tests unique-key lookups by code and name.
///
/// Expected: Some for existing keys, None otherwise
#[tokio::test]
async fn finds_department_by_unique_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Mathematics")
        .code("MATH")
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);

    let by_code = repo.find_by_code("MATH").await?;
    assert_eq!(by_code.map(|d| d.id), Some(department.id));

    let by_name = repo.find_by_name("Mathematics").await?;
    assert_eq!(by_name.map(|d| d.id), Some(department.id));

    assert!(repo.find_by_code("PHYS").await?.is_none());
    assert!(repo.exists_by_code("MATH").await?);
    assert!(repo.exists_by_name("Mathematics").await?);
    assert!(!repo.exists_by_name("Physics").await?);

    Ok(())
}
