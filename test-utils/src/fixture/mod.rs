//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions build in-memory entity models for unit tests and serve as the
//! default values for the factories. Unlike factories, fixtures do NOT touch the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let book = fixture::book::entity();
//! let priced = fixture::book::entity_builder().price(Some(25_000)).build();
//! ```

pub mod book;
pub mod book_detail;
pub mod department;
pub mod publisher;
pub mod student;
pub mod student_detail;
pub mod user;

pub use book::{entity as book_entity, entity_builder as book_entity_builder};
pub use department::entity as department_entity;
pub use publisher::entity as publisher_entity;
pub use student::entity as student_entity;
pub use student_detail::entity as student_detail_entity;
