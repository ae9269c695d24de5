use sea_orm_migration::{prelude::*, schema::*};

use super::m20250602_000005_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(BookDetail::Id))
                    .col(integer_uniq(BookDetail::BookId))
                    .col(text_null(BookDetail::Description))
                    .col(string_null(BookDetail::Language))
                    .col(integer_null(BookDetail::PageCount))
                    .col(string_null(BookDetail::Edition))
                    .col(string_null(BookDetail::CoverImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_detail_book_id")
                            .from(BookDetail::Table, BookDetail::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookDetail {
    Table,
    Id,
    BookId,
    Description,
    Language,
    PageCount,
    Edition,
    CoverImageUrl,
}
