//! Book detail factory for attaching detail rows to existing books.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Creates a detail row for the given book using fixture values.
///
/// # Arguments
/// - `db` - Database connection
/// - `book_id` - ID of the owning book
///
/// # Returns
/// - `Ok(entity::book_detail::Model)` - Created detail entity
/// - `Err(DbErr)` - Database error during insert (e.g. book already has a detail)
pub async fn create_book_detail(
    db: &DatabaseConnection,
    book_id: i32,
) -> Result<entity::book_detail::Model, DbErr> {
    let defaults = fixture::book_detail::entity();

    entity::book_detail::ActiveModel {
        id: ActiveValue::NotSet,
        book_id: ActiveValue::Set(book_id),
        description: ActiveValue::Set(defaults.description),
        language: ActiveValue::Set(defaults.language),
        page_count: ActiveValue::Set(defaults.page_count),
        edition: ActiveValue::Set(defaults.edition),
        cover_image_url: ActiveValue::Set(defaults.cover_image_url),
    }
    .insert(db)
    .await
}
