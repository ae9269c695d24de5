//! Database repository layer for all record families.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! record family. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from business logic. Every repository borrows any
//! `ConnectionTrait` implementor, so the same queries run on the pool or inside a transaction.
//! Associations are never loaded implicitly: owned details and parents are only read through
//! the explicit join-fetch methods.

pub mod book;
pub mod book_detail;
pub mod department;
pub mod publisher;
pub mod student;
pub mod student_detail;
pub mod user;

#[cfg(test)]
mod test;
