use super::*;

/// Tests deleting a department without students.
///
/// Expected: Ok with department removed
#[tokio::test]
async fn deletes_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let repo = DepartmentRepository::new(db);

    repo.delete(department.id).await?;

    assert!(repo.get_by_id(department.id).await?.is_none());

    Ok(())
}

/// Tests that the foreign key restricts deleting a department with students.
///
/// Expected: Err from the database, department still present
#[tokio::test]
async fn storage_restricts_delete_with_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _) = factory::helpers::create_student_with_department(db).await?;
    let repo = DepartmentRepository::new(db);

    let result = repo.delete(department.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(department.id).await?.is_some());

    Ok(())
}
