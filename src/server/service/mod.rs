//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Uniqueness checks, dependent-count guards and partial-update merges
//! - **Transactions**: Every check-then-write sequence runs inside one `DatabaseTransaction`
//!   that is committed on success and rolled back when dropped on any error path
//! - **Cascades**: Owned detail rows are created, updated and deleted explicitly alongside
//!   their owner
//! - **Error Translation**: Missing records become `NotFound`, duplicate keys and blocked
//!   deletes become `Conflict`
//!
//! While a transaction is open, services only query through it and never through the
//! pool, so a single-connection pool cannot deadlock.

pub mod book;
pub mod department;
pub mod publisher;
pub mod student;
pub mod user;

use crate::server::error::{record::RecordError, AppError};

/// Logs a rejected write at debug level and converts it into an `AppError`.
pub(crate) fn reject(err: RecordError) -> AppError {
    tracing::debug!("Rejected write: {}", err);
    err.into()
}

#[cfg(test)]
mod test;
