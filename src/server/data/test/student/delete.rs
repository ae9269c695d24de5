use super::*;

/// Tests deleting a student without a detail.
///
/// Expected: Ok with student removed and the department's student list empty
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, student) = factory::helpers::create_student_with_department(db).await?;
    let repo = StudentRepository::new(db);

    repo.delete(student.id).await?;

    assert!(repo.get_by_id(student.id).await?.is_none());
    assert!(repo.get_by_department_id(department.id).await?.is_empty());

    Ok(())
}

/// Tests that storage refuses to delete a student whose detail still exists.
///
/// The detail must be removed explicitly before its owner.
///
/// Expected: Err, with both the student and its detail still stored
#[tokio::test]
async fn storage_restricts_delete_with_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, detail) = factory::helpers::create_student_with_detail(db).await?;
    let repo = StudentRepository::new(db);

    let result = repo.delete(student.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(student.id).await?.is_some());
    let stored = StudentDetailRepository::new(db)
        .get_by_student_id(student.id)
        .await?
        .unwrap();
    assert_eq!(stored.id, detail.id);

    Ok(())
}
