//! Department data repository for database operations.
//!
//! Provides `DepartmentRepository` for department records. The repository works on any
//! SeaORM connection, so services can run it against the pool for reads and against an
//! open transaction for check-then-write sequences.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::department::{
    CreateDepartmentParam, Department, DepartmentWithStudentCount,
};

/// Department row joined with the number of students referencing it.
#[derive(Debug, FromQueryResult)]
struct DepartmentCountRow {
    id: i32,
    name: String,
    code: String,
    student_count: i64,
}

pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(DbErr)` - Database error, including unique violations on name or code
    pub async fn create(&self, param: CreateDepartmentParam) -> Result<Department, DbErr> {
        let entity = entity::department::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    /// Gets a department by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// Gets all departments in insertion order
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let entities = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find()
            .filter(entity::department::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    pub async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find()
            .filter(entity::department::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes the department's name and code back to its row.
    pub async fn update(&self, department: Department) -> Result<Department, DbErr> {
        let entity = entity::department::ActiveModel {
            id: ActiveValue::Unchanged(department.id),
            name: ActiveValue::Set(department.name),
            code: ActiveValue::Set(department.code),
        }
        .update(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    /// Deletes a department
    ///
    /// Callers must ensure no student references the department; the foreign key
    /// restricts the delete otherwise.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the students enrolled in a department with a single `COUNT` query.
    pub async fn count_students(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }

    /// Gets every department with its student count in one grouped query.
    ///
    /// Departments without students are included with a count of zero.
    pub async fn get_all_with_student_counts(
        &self,
    ) -> Result<Vec<DepartmentWithStudentCount>, DbErr> {
        let rows = entity::prelude::Department::find()
            .select_only()
            .column(entity::department::Column::Id)
            .column(entity::department::Column::Name)
            .column(entity::department::Column::Code)
            .column_as(entity::student::Column::Id.count(), "student_count")
            .join(
                JoinType::LeftJoin,
                entity::department::Relation::Student.def(),
            )
            .group_by(entity::department::Column::Id)
            .group_by(entity::department::Column::Name)
            .group_by(entity::department::Column::Code)
            .order_by_asc(entity::department::Column::Id)
            .into_model::<DepartmentCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| DepartmentWithStudentCount {
                department: Department {
                    id: row.id,
                    name: row.name,
                    code: row.code,
                },
                student_count: row.student_count.max(0) as u64,
            })
            .collect())
    }
}
