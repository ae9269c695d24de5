use super::*;

fn new_detail(phone_number: &str, email: Option<&str>) -> NewStudentDetail {
    NewStudentDetail {
        address: "12 Campus Road".to_string(),
        phone_number: phone_number.to_string(),
        email: email.map(str::to_string),
        date_of_birth: None,
    }
}

/// Tests creating the detail of a student.
///
/// Expected: Ok with detail linked to the student
#[tokio::test]
async fn creates_detail_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db, None).await?;
    let repo = StudentDetailRepository::new(db);

    let detail = repo
        .create(student.id, new_detail("010-1111-2222", Some("a@x.com")))
        .await?;

    assert_eq!(detail.student_id, student.id);
    assert_eq!(repo.get_by_student_id(student.id).await?, Some(detail));

    Ok(())
}

/// Tests that a student owns at most one detail.
///
/// Expected: Err from the unique index on the owning student
#[tokio::test]
async fn rejects_second_detail_for_same_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = factory::helpers::create_student_with_detail(db).await?;

    let result = StudentDetailRepository::new(db)
        .create(student.id, new_detail("010-9999-9999", None))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that several details may omit the email.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_details_without_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db, None).await?;
    let second = factory::create_student(db, None).await?;
    let repo = StudentDetailRepository::new(db);

    repo.create(first.id, new_detail("010-0000-1111", None))
        .await?;
    repo.create(second.id, new_detail("010-0000-2222", None))
        .await?;

    Ok(())
}
