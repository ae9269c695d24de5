//! Book detail fixtures for creating in-memory test data.

use entity::book_detail;

/// Creates a book detail entity model owned by the book with id `1`.
pub fn entity() -> book_detail::Model {
    book_detail::Model {
        id: 1,
        book_id: 1,
        description: Some("An introduction to Rust".to_string()),
        language: Some("English".to_string()),
        page_count: Some(560),
        edition: Some("2nd".to_string()),
        cover_image_url: None,
    }
}
