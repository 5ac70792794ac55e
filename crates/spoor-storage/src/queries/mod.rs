//! Query modules for each domain table, plus shared row-decode helpers.

pub mod content;
pub mod links;
pub mod sources;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use spoor_core::errors::StoreError;
use uuid::Uuid;

/// Decode a TEXT column into a Uuid inside a row closure.
pub(crate) fn decode_uuid(idx: usize, value: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Decode unix seconds into a UTC timestamp inside a row closure.
pub(crate) fn decode_timestamp(idx: usize, secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

/// Map a rusqlite error into the store taxonomy: row-decode failures
/// become `Decode`, everything else `Query`.
pub(crate) fn map_sql_err(e: rusqlite::Error) -> StoreError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::InvalidColumnType(..) => StoreError::Decode {
            message: e.to_string(),
        },
        _ => StoreError::Query {
            message: e.to_string(),
        },
    }
}
