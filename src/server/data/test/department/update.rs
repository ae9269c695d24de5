use super::*;

/// Tests writing department changes back to storage.
///
/// Expected: Ok with the new code persisted and the name unchanged
#[tokio::test]
async fn updates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_department(db).await?;
    let repo = DepartmentRepository::new(db);

    let mut department = repo.get_by_id(created.id).await?.unwrap();
    department.code = "NEW".to_string();
    repo.update(department).await?;

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.code, "NEW");
    assert_eq!(stored.name, created.name);

    Ok(())
}
