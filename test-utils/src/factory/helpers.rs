//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating records
//! together with the records they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive names, codes, numbers and ISBNs that never collide with the
/// unique constraints of the schema.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a department and a student enrolled in it.
///
/// # Returns
/// - `Ok((department, student))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_department(
    db: &DatabaseConnection,
) -> Result<(entity::department::Model, entity::student::Model), DbErr> {
    let department = crate::factory::department::create_department(db).await?;
    let student = crate::factory::student::create_student(db, Some(department.id)).await?;

    Ok((department, student))
}

/// Creates a student with a detail row attached, without a department.
///
/// # Returns
/// - `Ok((student, detail))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_detail(
    db: &DatabaseConnection,
) -> Result<(entity::student::Model, entity::student_detail::Model), DbErr> {
    let student = crate::factory::student::create_student(db, None).await?;
    let detail = crate::factory::student_detail::create_student_detail(db, student.id).await?;

    Ok((student, detail))
}

/// Creates a publisher and a book published by it.
///
/// # Returns
/// - `Ok((publisher, book))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_publisher(
    db: &DatabaseConnection,
) -> Result<(entity::publisher::Model, entity::book::Model), DbErr> {
    let publisher = crate::factory::publisher::create_publisher(db).await?;
    let book = crate::factory::book::BookFactory::new(db)
        .publisher_id(Some(publisher.id))
        .build()
        .await?;

    Ok((publisher, book))
}
