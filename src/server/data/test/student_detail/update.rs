use super::*;

/// Tests writing detail changes back to storage.
///
/// Expected: Ok with new address persisted and owner unchanged
#[tokio::test]
async fn updates_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = factory::helpers::create_student_with_detail(db).await?;
    let repo = StudentDetailRepository::new(db);

    let mut detail = repo.get_by_student_id(student.id).await?.unwrap();
    detail.address = "34 Library Lane".to_string();
    repo.update(detail).await?;

    let stored = repo.get_by_student_id(student.id).await?.unwrap();
    assert_eq!(stored.address, "34 Library Lane");
    assert_eq!(stored.student_id, student.id);

    Ok(())
}
