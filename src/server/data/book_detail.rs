//! Book detail data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::book::{BookDetail, BookDetailOptions};

pub struct BookDetailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookDetailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the detail row for a book
    pub async fn create(
        &self,
        book_id: i32,
        detail: BookDetailOptions,
    ) -> Result<BookDetail, DbErr> {
        let entity = entity::book_detail::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            description: ActiveValue::Set(detail.description),
            language: ActiveValue::Set(detail.language),
            page_count: ActiveValue::Set(detail.page_count),
            edition: ActiveValue::Set(detail.edition),
            cover_image_url: ActiveValue::Set(detail.cover_image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BookDetail::from_entity(entity))
    }

    pub async fn get_by_book_id(&self, book_id: i32) -> Result<Option<BookDetail>, DbErr> {
        let entity = entity::prelude::BookDetail::find()
            .filter(entity::book_detail::Column::BookId.eq(book_id))
            .one(self.db)
            .await?;

        Ok(entity.map(BookDetail::from_entity))
    }

    pub async fn update(&self, detail: BookDetail) -> Result<BookDetail, DbErr> {
        let entity = entity::book_detail::ActiveModel {
            id: ActiveValue::Unchanged(detail.id),
            book_id: ActiveValue::Unchanged(detail.book_id),
            description: ActiveValue::Set(detail.description),
            language: ActiveValue::Set(detail.language),
            page_count: ActiveValue::Set(detail.page_count),
            edition: ActiveValue::Set(detail.edition),
            cover_image_url: ActiveValue::Set(detail.cover_image_url),
        }
        .update(self.db)
        .await?;

        Ok(BookDetail::from_entity(entity))
    }

    /// Deletes the detail row of a book, returning the number of rows removed.
    pub async fn delete_by_book_id(&self, book_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BookDetail::delete_many()
            .filter(entity::book_detail::Column::BookId.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
