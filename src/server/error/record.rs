//! Typed outcomes of record operations that are expected during normal use.
//!
//! Validation failures are raised before any storage access, not-found errors when a
//! referenced id or key is absent, and conflicts when a write would break a unique key
//! or remove a parent that still has dependents. Callers branch on the variant; the HTTP
//! boundary maps them to 400, 404 and 409.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::AppError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Malformed or missing input.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No record exists for the requested id or key.
    #[error("{entity} with {key} '{value}' not found")]
    NotFound {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    /// The write would violate a unique key or orphan dependent records.
    #[error("{entity} with {key} '{value}' {reason}")]
    Conflict {
        reason: ConflictReason,
        entity: &'static str,
        key: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// Another record already holds the unique value.
    Duplicate,
    /// The record is still referenced by `count` records of kind `dependents`.
    HasDependents { dependents: &'static str, count: u64 },
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "already exists"),
            Self::HasDependents { dependents, count } => {
                write!(f, "still has {} {}", count, dependents)
            }
        }
    }
}

impl RecordError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, key: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key,
            value: value.to_string(),
        }
    }

    pub fn duplicate(entity: &'static str, key: &'static str, value: impl ToString) -> Self {
        Self::Conflict {
            reason: ConflictReason::Duplicate,
            entity,
            key,
            value: value.to_string(),
        }
    }

    /// Conflict raised when deleting a parent record that still has `count` dependents.
    pub fn has_dependents(
        entity: &'static str,
        id: i32,
        dependents: &'static str,
        count: u64,
    ) -> Self {
        Self::Conflict {
            reason: ConflictReason::HasDependents { dependents, count },
            entity,
            key: "id",
            value: id.to_string(),
        }
    }
}

/// Converts record errors into HTTP responses.
///
/// The error message is returned to the client as-is since it only names the
/// entity, key and value supplied by the request.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Translates a storage-level unique violation into the matching duplicate conflict.
///
/// Pre-checks inside a transaction can still race with a concurrent writer, so the
/// insert or update itself may fail on a unique index. `candidates` lists the unique
/// columns written by the statement with the values written; the column named in the
/// driver message is reported, falling back to the first candidate when the driver
/// message does not name one. Any other database error is passed through.
///
/// # Arguments
/// - `entity` - Name of the entity being written
/// - `candidates` - `(column, value)` pairs for every unique column in the write
///
/// # Returns
/// A closure suitable for `map_err` on a `Result<_, DbErr>`
pub fn unique_violation(
    entity: &'static str,
    candidates: Vec<(&'static str, String)>,
) -> impl FnOnce(DbErr) -> AppError {
    move |err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            let named = candidates
                .iter()
                .position(|(key, _)| message.contains(&format!(".{}", key)))
                .unwrap_or(0);

            match candidates.into_iter().nth(named) {
                Some((key, value)) => {
                    tracing::debug!("Unique violation on {}.{}: {}", entity, key, message);
                    RecordError::duplicate(entity, key, value).into()
                }
                None => AppError::DbErr(err),
            }
        }
        _ => AppError::DbErr(err),
    }
}
