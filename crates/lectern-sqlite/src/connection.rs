//! Per-request connections to a single storage unit
//!
//! Translation databases are provisioned externally and never written by
//! Lectern, so every connection is opened read-only and additionally marked
//! `query_only`. A `UnitConnection` is created for one request and closed when
//! dropped, which covers success, not-found and error paths alike.

use crate::error::{SqliteError, SqliteResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Read-only connection to one translation database
pub struct UnitConnection {
    conn: Connection,
}

impl UnitConnection {
    /// Open the file at `path` read-only
    ///
    /// Never creates the file: a missing unit is a connection error.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SqliteResult<Self> {
        debug!(path = %path.display(), "Opening storage unit");

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            SqliteError::Connection(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let unit = Self { conn };
        unit.configure_pragmas(busy_timeout_ms)?;
        Ok(unit)
    }

    /// Execute a closure with the connection
    pub fn with_connection<F, T>(&self, f: F) -> SqliteResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T>,
    {
        f(&self.conn)
    }

    fn configure_pragmas(&self, busy_timeout_ms: u32) -> SqliteResult<()> {
        self.conn
            .busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))?;
        self.conn
            .execute_batch("PRAGMA query_only = ON; PRAGMA temp_store = MEMORY;")?;
        Ok(())
    }
}
