use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentDetail::Id))
                    .col(integer_uniq(StudentDetail::StudentId))
                    .col(string(StudentDetail::Address))
                    .col(string_uniq(StudentDetail::PhoneNumber))
                    .col(string_null(StudentDetail::Email).unique_key())
                    .col(date_null(StudentDetail::DateOfBirth))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_detail_student_id")
                            .from(StudentDetail::Table, StudentDetail::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentDetail {
    Table,
    Id,
    StudentId,
    Address,
    PhoneNumber,
    Email,
    DateOfBirth,
}
