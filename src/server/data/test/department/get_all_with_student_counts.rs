use super::*;

/// Tests the grouped department listing.
///
/// Verifies every department is listed in insertion order, including departments
/// without students.
///
/// Expected: Ok with counts [1, 0]
#[tokio::test]
async fn lists_departments_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _) = factory::helpers::create_student_with_department(db).await?;
    let empty = factory::create_department(db).await?;

    let listed = DepartmentRepository::new(db)
        .get_all_with_student_counts()
        .await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].department.id, department.id);
    assert_eq!(listed[0].student_count, 1);
    assert_eq!(listed[1].department.id, empty.id);
    assert_eq!(listed[1].student_count, 0);

    Ok(())
}
