//! HTTP request handlers.
//!
//! Each handler converts the request DTO into a domain parameter, calls the matching
//! service and converts the result back into a DTO. Handlers hold no business rules;
//! validation lives in the parameter constructors and every check that touches storage
//! lives in the services.

pub mod book;
pub mod department;
pub mod param;
pub mod publisher;
pub mod student;
pub mod user;
