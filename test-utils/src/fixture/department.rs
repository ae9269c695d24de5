//! Department fixtures for creating in-memory test data.

use entity::department;

/// Default test department name.
pub const DEFAULT_NAME: &str = "Computer Science";

/// Default test department code.
pub const DEFAULT_CODE: &str = "CS";

/// Creates a department entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Computer Science"`
/// - code: `"CS"`
pub fn entity() -> department::Model {
    department::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        code: DEFAULT_CODE.to_string(),
    }
}
