use super::*;

/// Tests deleting a student's detail by owner id.
///
/// Expected: Ok(1) on first delete, Ok(0) once nothing is left
#[tokio::test]
async fn deletes_detail_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = factory::helpers::create_student_with_detail(db).await?;
    let repo = StudentDetailRepository::new(db);

    assert_eq!(repo.delete_by_student_id(student.id).await?, 1);
    assert!(repo.get_by_student_id(student.id).await?.is_none());
    assert_eq!(repo.delete_by_student_id(student.id).await?, 0);

    Ok(())
}
