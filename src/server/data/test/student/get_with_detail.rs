use super::*;

/// Tests the student-with-detail join.
///
/// Expected: Ok with the detail attached
#[tokio::test]
async fn gets_student_with_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, detail) = factory::helpers::create_student_with_detail(db).await?;

    let result = StudentRepository::new(db)
        .get_with_detail(student.id)
        .await?
        .unwrap();

    assert_eq!(result.student.id, student.id);
    let loaded = result.detail.unwrap();
    assert_eq!(loaded.id, detail.id);
    assert_eq!(loaded.phone_number, detail.phone_number);

    Ok(())
}

/// Tests the join for a student without a detail.
///
/// Expected: Ok with detail None
#[tokio::test]
async fn gets_student_without_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db, None).await?;

    let result = StudentRepository::new(db)
        .get_with_detail(student.id)
        .await?
        .unwrap();

    assert!(result.detail.is_none());

    Ok(())
}

/// Tests the join for a missing student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db).get_with_detail(999).await?;

    assert!(result.is_none());

    Ok(())
}
