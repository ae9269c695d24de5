//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db)
///     .student_number("CS001")
///     .department_id(Some(department.id))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    student_number: String,
    department_id: Option<i32>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"`
    /// - student_number: `"S{id:05}"`
    /// - department_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            student_number: format!("S{:05}", id),
            department_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn student_number(mut self, student_number: impl Into<String>) -> Self {
        self.student_number = student_number.into();
        self
    }

    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            student_number: ActiveValue::Set(self.student_number),
            department_id: ActiveValue::Set(self.department_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given department.
pub async fn create_student(
    db: &DatabaseConnection,
    department_id: Option<i32>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db)
        .department_id(department_id)
        .build()
        .await
}
