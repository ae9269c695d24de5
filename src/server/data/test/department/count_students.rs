use super::*;

/// Tests counting students per department.
///
/// Verifies the count only includes students of the requested department and is
/// zero for a department without students.
///
/// Expected: Ok with 2 for the first department and 0 for the second
#[tokio::test]
async fn counts_students_of_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let empty = factory::create_department(db).await?;
    factory::create_student(db, Some(department.id)).await?;
    factory::create_student(db, Some(department.id)).await?;
    factory::create_student(db, None).await?;

    let repo = DepartmentRepository::new(db);

    assert_eq!(repo.count_students(department.id).await?, 2);
    assert_eq!(repo.count_students(empty.id).await?, 0);

    Ok(())
}
