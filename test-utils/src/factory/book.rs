//! Book factory for creating test book entities.
//!
//! Defaults are sourced from the book fixture, with a unique title and ISBN per
//! factory so multiple books can be created in the same test.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db)
///     .author("Author A")
///     .publisher_id(Some(publisher.id))
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::book::Model,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values from fixture.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - isbn: `"978-{id:010}"`
    /// - remaining fields from `fixture::book::entity()`, without a publisher
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::book::entity_builder()
            .title(format!("Book {}", id))
            .isbn(format!("978-{:010}", id))
            .publisher_id(None)
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.entity.author = author.into();
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.entity.isbn = isbn.into();
        self
    }

    pub fn price(mut self, price: Option<i32>) -> Self {
        self.entity.price = price;
        self
    }

    pub fn publisher_id(mut self, publisher_id: Option<i32>) -> Self {
        self.entity.publisher_id = publisher_id;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            author: ActiveValue::Set(self.entity.author),
            isbn: ActiveValue::Set(self.entity.isbn),
            price: ActiveValue::Set(self.entity.price),
            publish_date: ActiveValue::Set(self.entity.publish_date),
            publisher_id: ActiveValue::Set(self.entity.publisher_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values and no publisher.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
