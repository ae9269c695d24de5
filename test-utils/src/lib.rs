//! Registrar Test Utils
//!
//! Shared testing utilities for the registrar record store. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases whose schemas are
//! generated straight from the SeaORM entities, plus factories and fixtures for the
//! department, student, publisher, book and user records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert records with sensible defaults
//! - **fixture**: In-memory entity models, no database involved
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn counts_students() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_department_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let department = factory::create_department(db).await?;
//!     factory::create_student(db, Some(department.id)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
