//! Propagation table queries.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use spoor_core::errors::StoreError;
use spoor_core::model::{PropagationKind, PropagationLink};

use super::{decode_timestamp, decode_uuid, map_sql_err};

/// Record a propagation event. Owner fields on the value are ignored;
/// owners are always re-derived at read time.
pub fn insert(conn: &Connection, link: &PropagationLink) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO propagation
             (source_content_id, target_content_id, kind, similarity, mutated,
              time_delta_secs, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            link.source_content_id.to_string(),
            link.target_content_id.to_string(),
            link.kind.name(),
            link.similarity,
            link.mutated as i64,
            link.time_delta_secs,
            link.recorded_at.timestamp(),
        ],
    )
    .map_err(map_sql_err)?;
    Ok(())
}

/// Links recorded at or after `since`. The LEFT JOINs resolve each
/// endpoint's owning source; a missing content row or an unattributed
/// item leaves the owner NULL.
pub fn list_since(
    conn: &Connection,
    since: DateTime<Utc>,
) -> Result<Vec<PropagationLink>, StoreError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT p.source_content_id, p.target_content_id, p.kind, p.similarity,
                    p.mutated, p.time_delta_secs, p.recorded_at,
                    sc.source_id AS source_owner, tc.source_id AS target_owner
             FROM propagation p
             LEFT JOIN content sc ON sc.id = p.source_content_id
             LEFT JOIN content tc ON tc.id = p.target_content_id
             WHERE p.recorded_at >= ?1
             ORDER BY p.recorded_at",
        )
        .map_err(map_sql_err)?;

    let rows = stmt
        .query_map(params![since.timestamp()], |row| {
            let source_id: String = row.get(0)?;
            let target_id: String = row.get(1)?;
            let kind: String = row.get(2)?;
            let recorded_secs: i64 = row.get(6)?;
            let source_owner: Option<String> = row.get(7)?;
            let target_owner: Option<String> = row.get(8)?;
            Ok(PropagationLink {
                source_content_id: decode_uuid(0, &source_id)?,
                target_content_id: decode_uuid(1, &target_id)?,
                kind: PropagationKind::parse(&kind).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        Type::Text,
                        format!("unknown propagation kind '{kind}'").into(),
                    )
                })?,
                similarity: row.get(3)?,
                mutated: row.get::<_, i64>(4)? != 0,
                time_delta_secs: row.get(5)?,
                recorded_at: decode_timestamp(6, recorded_secs)?,
                source_owner: source_owner
                    .as_deref()
                    .map(|s| decode_uuid(7, s))
                    .transpose()?,
                target_owner: target_owner
                    .as_deref()
                    .map(|s| decode_uuid(8, s))
                    .transpose()?,
            })
        })
        .map_err(map_sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_sql_err)?;

    Ok(rows)
}
