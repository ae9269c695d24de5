//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "user@example.com";

/// Creates a user entity model with default values.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
    }
}
