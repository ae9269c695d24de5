//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db)
///     .name("Computer Science")
///     .code("CS")
///     .build()
///     .await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Department {id}"`
    /// - code: `"D{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Department {}", id),
            code: format!("D{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the department entity into the database.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
///
/// Shorthand for `DepartmentFactory::new(db).build().await`.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
