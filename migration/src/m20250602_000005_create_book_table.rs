use sea_orm_migration::{prelude::*, schema::*};

use super::m20250602_000004_create_publisher_table::Publisher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(string_uniq(Book::Isbn))
                    .col(integer_null(Book::Price))
                    .col(date_null(Book::PublishDate))
                    .col(integer_null(Book::PublisherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_publisher_id")
                            .from(Book::Table, Book::PublisherId)
                            .to(Publisher::Table, Publisher::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_author")
                    .table(Book::Table)
                    .col(Book::Author)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_publisher_id")
                    .table(Book::Table)
                    .col(Book::PublisherId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Isbn,
    Price,
    PublishDate,
    PublisherId,
}
