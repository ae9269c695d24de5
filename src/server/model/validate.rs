//! Input checks applied while converting request DTOs into params.

use crate::server::error::record::RecordError;

/// Returns the trimmed value, rejecting blank input.
pub fn required(field: &'static str, value: String) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::validation(field, "must not be blank"));
    }

    Ok(trimmed.to_string())
}

/// Keeps a partial-update value only when it carries non-blank text.
///
/// Missing and blank values both mean "leave the current value untouched".
pub fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks that an email address has a local part and a dotted domain.
pub fn email(field: &'static str, value: &str) -> Result<(), RecordError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|part| !part.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(RecordError::validation(field, "must be a valid email address"));
    }

    Ok(())
}

pub fn non_negative(field: &'static str, value: Option<i32>) -> Result<(), RecordError> {
    match value {
        Some(v) if v < 0 => Err(RecordError::validation(field, "must not be negative")),
        _ => Ok(()),
    }
}
