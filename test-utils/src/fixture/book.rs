//! Book fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::book;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "The Rust Programming Language";

/// Default test book author.
pub const DEFAULT_AUTHOR: &str = "Steve Klabnik";

/// Default test ISBN.
pub const DEFAULT_ISBN: &str = "978-1718503106";

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"The Rust Programming Language"`
/// - author: `"Steve Klabnik"`
/// - isbn: `"978-1718503106"`
/// - price: `Some(39_000)`
/// - publish_date: `2023-02-28`
/// - publisher_id: `None`
pub fn entity() -> book::Model {
    book::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        author: DEFAULT_AUTHOR.to_string(),
        isbn: DEFAULT_ISBN.to_string(),
        price: Some(39_000),
        publish_date: NaiveDate::from_ymd_opt(2023, 2, 28),
        publisher_id: None,
    }
}

/// Creates a book entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let book = fixture::book::entity_builder()
///     .isbn("978-1")
///     .publisher_id(Some(3))
///     .build();
/// ```
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder { entity: entity() }
}

/// Builder for book entity models with default values.
pub struct BookEntityBuilder {
    entity: book::Model,
}

impl BookEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn build(self) -> book::Model {
        self.entity
    }
}
