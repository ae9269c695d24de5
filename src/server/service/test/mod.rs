mod student;

use crate::server::error::{
    record::{ConflictReason, RecordError},
    AppError,
};

/// Returns the conflicting key when the error is a duplicate-value conflict.
fn duplicate_key(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::RecordErr(RecordError::Conflict {
            reason: ConflictReason::Duplicate,
            key,
            ..
        }) => Some(*key),
        _ => None,
    }
}

fn is_not_found(err: &AppError) -> bool {
    matches!(err, AppError::RecordErr(RecordError::NotFound { .. }))
}
