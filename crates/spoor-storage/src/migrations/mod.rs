//! Schema migrations tracked through `PRAGMA user_version`.

pub mod v001_initial;

use rusqlite::Connection;
use spoor_core::errors::StoreError;

/// Apply every migration newer than the database's recorded version.
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[(v001_initial::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql).map_err(|e| StoreError::Migration {
                version: *version,
                message: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StoreError::Migration {
                    version: *version,
                    message: e.to_string(),
                })?;
            tracing::info!(version, "applied migration");
        }
    }

    Ok(())
}

/// Schema version currently recorded in the database.
pub fn current_version(conn: &Connection) -> Result<u32, StoreError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StoreError::Migration {
            version: 0,
            message: format!("failed to read user_version: {e}"),
        })
}
