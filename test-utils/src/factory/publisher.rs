//! Publisher factory for creating test publisher entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test publishers with customizable fields.
pub struct PublisherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    established_date: Option<NaiveDate>,
    address: Option<String>,
}

impl<'a> PublisherFactory<'a> {
    /// Creates a new PublisherFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Publisher {id}"`
    /// - established_date: `None`
    /// - address: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Publisher {}", id),
            established_date: None,
            address: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn established_date(mut self, established_date: Option<NaiveDate>) -> Self {
        self.established_date = established_date;
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Builds and inserts the publisher entity into the database.
    pub async fn build(self) -> Result<entity::publisher::Model, DbErr> {
        entity::publisher::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            established_date: ActiveValue::Set(self.established_date),
            address: ActiveValue::Set(self.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a publisher with default values.
pub async fn create_publisher(db: &DatabaseConnection) -> Result<entity::publisher::Model, DbErr> {
    PublisherFactory::new(db).build().await
}
