use super::*;

/// Tests listing the students of a department.
///
/// Verifies students of other departments are excluded and results keep insertion
/// order.
///
/// Expected: Ok with the two students of the department in creation order
#[tokio::test]
async fn lists_students_of_department_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let other = factory::create_department(db).await?;
    let first = factory::create_student(db, Some(department.id)).await?;
    factory::create_student(db, Some(other.id)).await?;
    let second = factory::create_student(db, Some(department.id)).await?;

    let students = StudentRepository::new(db)
        .get_by_department_id(department.id)
        .await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
