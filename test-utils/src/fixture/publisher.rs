//! Publisher fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::publisher;

/// Default test publisher name.
pub const DEFAULT_NAME: &str = "Hanbit Media";

/// Creates a publisher entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Hanbit Media"`
/// - established_date: `1993-06-01`
/// - address: `Some("Seoul")`
pub fn entity() -> publisher::Model {
    publisher::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        established_date: NaiveDate::from_ymd_opt(1993, 6, 1),
        address: Some("Seoul".to_string()),
    }
}
