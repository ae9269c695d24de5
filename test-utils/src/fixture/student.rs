//! Student fixtures for creating in-memory test data.

use entity::student;

/// Default test student name.
pub const DEFAULT_NAME: &str = "Kim";

/// Default test student number.
pub const DEFAULT_STUDENT_NUMBER: &str = "CS001";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Kim"`
/// - student_number: `"CS001"`
/// - department_id: `Some(1)`
pub fn entity() -> student::Model {
    student::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        student_number: DEFAULT_STUDENT_NUMBER.to_string(),
        department_id: Some(1),
    }
}
