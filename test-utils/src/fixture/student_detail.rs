//! Student detail fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::student_detail;

/// Default test address.
pub const DEFAULT_ADDRESS: &str = "12 Campus Road";

/// Default test phone number.
pub const DEFAULT_PHONE_NUMBER: &str = "010-0000-0001";

/// Creates a student detail entity model with default values.
///
/// The model belongs to the student with id `1` and carries an email and a date
/// of birth so conversions can be checked for every optional field.
pub fn entity() -> student_detail::Model {
    student_detail::Model {
        id: 1,
        student_id: 1,
        address: DEFAULT_ADDRESS.to_string(),
        phone_number: DEFAULT_PHONE_NUMBER.to_string(),
        email: Some("kim@example.com".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(2001, 3, 14),
    }
}
