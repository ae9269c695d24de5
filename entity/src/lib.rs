//! SeaORM entities for the registrar record store.
//!
//! Two ownership trees live here: Department → Student → StudentDetail and
//! Publisher → Book → BookDetail. `User` stands alone.
//!
//! Relations are declared so that `find_also_related` and explicit joins work, but
//! nothing is fetched implicitly. Foreign keys from children to parents use
//! `Restrict` so that a parent with dependents can never be removed at the storage
//! level, while owned detail rows use `Cascade` toward their owner.

pub mod prelude;

pub mod book;
pub mod book_detail;
pub mod department;
pub mod publisher;
pub mod student;
pub mod student_detail;
pub mod user;
