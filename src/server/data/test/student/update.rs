use super::*;

/// Tests writing student changes back to storage.
///
/// Expected: Ok with the student moved to the new department
#[tokio::test]
async fn updates_student_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_student_with_department(db).await?;
    let target = factory::create_department(db).await?;
    let repo = StudentRepository::new(db);

    let mut student = repo.get_by_id(created.id).await?.unwrap();
    student.department_id = Some(target.id);
    repo.update(student).await?;

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.department_id, Some(target.id));
    assert_eq!(stored.student_number, created.student_number);

    Ok(())
}
