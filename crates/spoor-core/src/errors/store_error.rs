//! Store errors covering connection, migration, and query failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open store: {message}")]
    Open { message: String },

    #[error("Migration to version {version} failed: {message}")]
    Migration { version: u32, message: String },

    #[error("Query failed: {message}")]
    Query { message: String },

    #[error("Failed to decode stored row: {message}")]
    Decode { message: String },
}
