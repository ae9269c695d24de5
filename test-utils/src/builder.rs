use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entities, so unique columns and foreign keys
/// declared on the entities are enforced by the test database as well.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Department, Student};
///
/// let test = TestBuilder::new()
///     .with_table(Department)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the Department, Student and StudentDetail tables in dependency order.
    pub fn with_department_tables(self) -> Self {
        self.with_table(Department)
            .with_table(Student)
            .with_table(StudentDetail)
    }

    /// Adds the Publisher, Book and BookDetail tables in dependency order.
    pub fn with_publisher_tables(self) -> Self {
        self.with_table(Publisher)
            .with_table(Book)
            .with_table(BookDetail)
    }

    /// Adds every table of the record store.
    ///
    /// Equivalent to `with_department_tables()` followed by `with_publisher_tables()`
    /// and the User table.
    pub fn with_record_tables(self) -> Self {
        self.with_department_tables()
            .with_publisher_tables()
            .with_table(User)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
