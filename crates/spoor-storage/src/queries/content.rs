//! Content table queries.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use spoor_core::errors::StoreError;
use spoor_core::model::ContentItem;

use super::{decode_timestamp, decode_uuid, map_sql_err};

/// Insert or replace a content item.
pub fn insert(conn: &Connection, item: &ContentItem) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO content (id, source_id, published_at, language)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            item.id.to_string(),
            item.source_id.map(|id| id.to_string()),
            item.published_at.map(|at| at.timestamp()),
            item.language,
        ],
    )
    .map_err(map_sql_err)?;
    Ok(())
}

/// Content with a known publication time at or after `since`, ordered by
/// publication time ascending. Rows without a timestamp never appear.
pub fn list_published_since(
    conn: &Connection,
    since: DateTime<Utc>,
) -> Result<Vec<ContentItem>, StoreError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, source_id, published_at, language
             FROM content
             WHERE published_at IS NOT NULL AND published_at >= ?1
             ORDER BY published_at",
        )
        .map_err(map_sql_err)?;

    let rows = stmt
        .query_map(params![since.timestamp()], |row| {
            let id: String = row.get(0)?;
            let source_id: Option<String> = row.get(1)?;
            let published_secs: i64 = row.get(2)?;
            Ok(ContentItem {
                id: decode_uuid(0, &id)?,
                source_id: source_id.as_deref().map(|s| decode_uuid(1, s)).transpose()?,
                published_at: Some(decode_timestamp(2, published_secs)?),
                language: row.get(3)?,
            })
        })
        .map_err(map_sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_sql_err)?;

    Ok(rows)
}
