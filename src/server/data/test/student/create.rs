use super::*;

/// Tests creating a student enrolled in a department.
///
/// Expected: Ok with student persisted and findable by student number
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo
        .create("Kim".to_string(), "CS001".to_string(), Some(department.id))
        .await?;

    assert_eq!(student.department_id, Some(department.id));

    let found = repo.find_by_student_number("CS001").await?;
    assert_eq!(found, Some(student));
    assert!(repo.exists_by_student_number("CS001").await?);
    assert!(!repo.exists_by_student_number("CS002").await?);

    Ok(())
}

/// Tests creating a student that belongs to no department.
///
/// Expected: Ok with department_id None
#[tokio::test]
async fn creates_student_without_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db)
        .create("Lee".to_string(), "EE001".to_string(), None)
        .await?;

    assert_eq!(student.department_id, None);

    Ok(())
}
