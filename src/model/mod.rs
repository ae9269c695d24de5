//! Request and response shapes shared by the HTTP boundary.
//!
//! DTOs carry only the fields a client may set or see. Responses never embed a parent's
//! child collection; parents expose dependent counts and children expose at most a summary
//! of their parent.

pub mod api;
pub mod book;
pub mod department;
pub mod publisher;
pub mod student;
pub mod user;
