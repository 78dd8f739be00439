//! Bookmark store error types
//!
//! # Error Types
//!
//! - **`NotFound`**: The profile holds no `places.sqlite`
//! - **`StoreOpen`**: The database file exists but cannot be opened or is not SQLite
//! - **`StoreQuery`**: A query failed (missing tables, schema mismatch, locked database)
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Bookmark store errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Database file does not exist
    #[error("Bookmark database not found: {0}")]
    NotFound(String),

    /// Database file could not be opened as SQLite
    #[error("Cannot open bookmark database {path}: {source}")]
    StoreOpen {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Query against an opened database failed
    #[error("Bookmark query failed: {0}")]
    StoreQuery(#[from] rusqlite::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
