//! SQLite connection setup.

use std::path::Path;

use rusqlite::Connection;
use spoor_core::errors::StoreError;

/// Open a file-backed database, creating the file if missing, and apply
/// the standard pragmas.
pub fn open_file(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path).map_err(|e| StoreError::Open {
        message: format!("{}: {e}", path.display()),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database. Used by tests and ephemeral runs.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
        message: e.to_string(),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}

/// WAL keeps concurrent readers from blocking the writer; the rest are
/// the usual safety/throughput settings for a single-writer workload.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;
         PRAGMA temp_store = MEMORY;",
    )
    .map_err(|e| StoreError::Open {
        message: format!("failed to apply pragmas: {e}"),
    })
}
