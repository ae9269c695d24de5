use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::Name))
                    .col(string_uniq(Student::StudentNumber))
                    .col(integer_null(Student::DepartmentId))
                    // Departments with students cannot be removed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_department_id")
                            .from(Student::Table, Student::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_department_id")
                    .table(Student::Table)
                    .col(Student::DepartmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Name,
    StudentNumber,
    DepartmentId,
}
