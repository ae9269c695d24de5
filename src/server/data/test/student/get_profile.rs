use super::*;

/// Tests the student profile join over detail and department.
///
/// Expected: Ok with student, detail and department populated
#[tokio::test]
async fn gets_full_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, student) = factory::helpers::create_student_with_department(db).await?;
    let detail = factory::student_detail::StudentDetailFactory::new(db, student.id)
        .email(Some("kim@example.com".to_string()))
        .build()
        .await?;

    let profile = StudentRepository::new(db)
        .get_profile(student.id)
        .await?
        .unwrap();

    assert_eq!(profile.student.student_number, student.student_number);
    let loaded_detail = profile.detail.unwrap();
    assert_eq!(loaded_detail.id, detail.id);
    assert_eq!(loaded_detail.student_id, student.id);
    assert_eq!(loaded_detail.email.as_deref(), Some("kim@example.com"));
    let loaded_department = profile.department.unwrap();
    assert_eq!(loaded_department.id, department.id);
    assert_eq!(loaded_department.code, department.code);

    Ok(())
}

/// Tests the profile join for a student with neither detail nor department.
///
/// Expected: Ok with detail and department None
#[tokio::test]
async fn gets_bare_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db, None).await?;

    let profile = StudentRepository::new(db)
        .get_profile(student.id)
        .await?
        .unwrap();

    assert_eq!(profile.student.id, student.id);
    assert!(profile.detail.is_none());
    assert!(profile.department.is_none());

    Ok(())
}
