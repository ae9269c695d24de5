//! Student detail factory for creating test student detail entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating student detail rows attached to an existing student.
pub struct StudentDetailFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    address: String,
    phone_number: String,
    email: Option<String>,
    date_of_birth: Option<NaiveDate>,
}

impl<'a> StudentDetailFactory<'a> {
    /// Creates a new StudentDetailFactory with default values.
    ///
    /// Defaults:
    /// - address: fixture default address
    /// - phone_number: `"010-{id:04}-{id:04}"`
    /// - email: `"student{id}@example.com"`
    /// - date_of_birth: `None`
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            address: fixture::student_detail::DEFAULT_ADDRESS.to_string(),
            phone_number: format!("010-{:04}-{:04}", id % 10_000, id),
            email: Some(format!("student{}@example.com", id)),
            date_of_birth: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Builds and inserts the student detail entity into the database.
    pub async fn build(self) -> Result<entity::student_detail::Model, DbErr> {
        entity::student_detail::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            address: ActiveValue::Set(self.address),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a detail row with default values for the given student.
pub async fn create_student_detail(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::student_detail::Model, DbErr> {
    StudentDetailFactory::new(db, student_id).build().await
}
