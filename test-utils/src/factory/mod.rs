//! Factory methods for creating test data.
//!
//! Factories insert records with sensible defaults, reducing boilerplate in tests.
//! Each record type has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let department = factory::create_department(&db).await?;
//! let student = factory::create_student(&db, Some(department.id)).await?;
//!
//! let (publisher, book) = factory::helpers::create_book_with_publisher(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db)
//!     .isbn("978-1")
//!     .author("Author A")
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod book_detail;
pub mod department;
pub mod helpers;
pub mod publisher;
pub mod student;
pub mod student_detail;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use book::create_book;
pub use book_detail::create_book_detail;
pub use department::create_department;
pub use publisher::create_publisher;
pub use student::create_student;
pub use student_detail::create_student_detail;
pub use user::create_user;
