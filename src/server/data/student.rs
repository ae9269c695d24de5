//! Student data repository for database operations.
//!
//! Students are read without their detail by default. `get_with_detail` and
//! `get_profile` are the only read paths that include owned or parent records, and
//! each is a single join query.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::{
    department::Department,
    student::{Student, StudentDetail, StudentProfile, StudentWithDetail},
};

/// Flattened row of a student left-joined with its detail and department.
#[derive(Debug, FromQueryResult)]
struct StudentProfileRow {
    id: i32,
    name: String,
    student_number: String,
    department_id: Option<i32>,
    detail_id: Option<i32>,
    address: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    date_of_birth: Option<NaiveDate>,
    department_name: Option<String>,
    department_code: Option<String>,
}

impl StudentProfileRow {
    fn into_profile(self) -> StudentProfile {
        let detail = match (self.detail_id, self.address, self.phone_number) {
            (Some(detail_id), Some(address), Some(phone_number)) => Some(StudentDetail {
                id: detail_id,
                student_id: self.id,
                address,
                phone_number,
                email: self.email,
                date_of_birth: self.date_of_birth,
            }),
            _ => None,
        };

        let department = match (self.department_id, self.department_name, self.department_code)
        {
            (Some(department_id), Some(name), Some(code)) => Some(Department {
                id: department_id,
                name,
                code,
            }),
            _ => None,
        };

        StudentProfile {
            student: Student {
                id: self.id,
                name: self.name,
                student_number: self.student_number,
                department_id: self.department_id,
            },
            detail,
            department,
        }
    }
}

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student without any detail.
    ///
    /// # Arguments
    /// - `name` - Student name
    /// - `student_number` - Unique student number
    /// - `department_id` - Department the student is enrolled in, if any
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(DbErr)` - Database error, including a unique violation on the student number
    pub async fn create(
        &self,
        name: String,
        student_number: String,
        department_id: Option<i32>,
    ) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(name),
            student_number: ActiveValue::Set(student_number),
            department_id: ActiveValue::Set(department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    pub async fn find_by_student_number(
        &self,
        student_number: &str,
    ) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    pub async fn exists_by_student_number(&self, student_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the students of a department in insertion order
    pub async fn get_by_department_id(&self, department_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::DepartmentId.eq(department_id))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Writes the student's own fields back to its row. The detail is left untouched.
    pub async fn update(&self, student: Student) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(student.id),
            name: ActiveValue::Set(student.name),
            student_number: ActiveValue::Set(student.student_number),
            department_id: ActiveValue::Set(student.department_id),
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Deletes a student row.
    ///
    /// The detail row must be removed first; see `StudentService::delete`.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a student and its detail with a single join.
    pub async fn get_with_detail(&self, id: i32) -> Result<Option<StudentWithDetail>, DbErr> {
        let result = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::StudentDetail)
            .one(self.db)
            .await?;

        Ok(result.map(|(student, detail)| StudentWithDetail {
            student: Student::from_entity(student),
            detail: detail.map(StudentDetail::from_entity),
        }))
    }

    /// Gets a student with its detail and department in one join query.
    pub async fn get_profile(&self, id: i32) -> Result<Option<StudentProfile>, DbErr> {
        use entity::{department, student, student_detail};

        let row = entity::prelude::Student::find_by_id(id)
            .select_only()
            .column(student::Column::Id)
            .column(student::Column::Name)
            .column(student::Column::StudentNumber)
            .column(student::Column::DepartmentId)
            .column_as(student_detail::Column::Id, "detail_id")
            .column(student_detail::Column::Address)
            .column(student_detail::Column::PhoneNumber)
            .column(student_detail::Column::Email)
            .column(student_detail::Column::DateOfBirth)
            .column_as(department::Column::Name, "department_name")
            .column_as(department::Column::Code, "department_code")
            .join(JoinType::LeftJoin, student::Relation::StudentDetail.def())
            .join(JoinType::LeftJoin, student::Relation::Department.def())
            .into_model::<StudentProfileRow>()
            .one(self.db)
            .await?;

        Ok(row.map(StudentProfileRow::into_profile))
    }
}
