use super::*;

/// Tests creating a department.
///
/// Verifies that the repository inserts the department and returns it with a
/// generated id.
///
/// Expected: Ok with department persisted
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let department = repo
        .create(CreateDepartmentParam {
            name: "Computer Science".to_string(),
            code: "CS".to_string(),
        })
        .await?;

    assert_eq!(department.name, "Computer Science");
    assert_eq!(department.code, "CS");

    let stored = repo.get_by_id(department.id).await?;
    assert_eq!(stored, Some(department));

    Ok(())
}

/// Tests the unique index on the department code.
///
/// Expected: Err with unique constraint violation on second insert
#[tokio::test]
async fn rejects_duplicate_code_at_storage_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_department(db).await?;

    let result = DepartmentRepository::new(db)
        .create(CreateDepartmentParam {
            name: "Another Name".to_string(),
            code: existing.code,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
