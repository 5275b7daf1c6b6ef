//! Error types for SQLite storage

use lectern_core::LookupError;
use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Storage unit could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// Data directory could not be scanned
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Blocking task failed to complete
    #[error("Task error: {0}")]
    Task(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),

    /// Failure while serving one translation's storage unit
    #[error("{acronym}: {source}")]
    Unit {
        acronym: String,
        source: Box<SqliteError>,
    },
}

impl SqliteError {
    /// Attach the acronym of the unit being queried
    pub fn in_unit(self, acronym: impl Into<String>) -> Self {
        Self::Unit {
            acronym: acronym.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

impl From<SqliteError> for LookupError {
    fn from(err: SqliteError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
