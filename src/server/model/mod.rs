//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! records and operation parameters. Domain models are converted from entity models at
//! the repository boundary and transformed to DTOs at the controller boundary. Create and
//! update params are validated while being built from their DTOs, so services never see
//! malformed input.

pub mod book;
pub mod department;
pub mod publisher;
pub mod student;
pub mod user;
pub mod validate;
