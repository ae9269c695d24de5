//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. The record store keeps no in-process
//! state besides the database pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around the connected database pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
