//! Source table queries.

use rusqlite::types::Type;
use rusqlite::{params, Connection};
use spoor_core::errors::StoreError;
use spoor_core::model::{Source, SourceKind};

use super::{decode_uuid, map_sql_err};

/// Insert or replace a source record.
pub fn insert(conn: &Connection, source: &Source) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO sources
             (id, name, kind, language, is_doppelganger, is_amplifier, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            source.id.to_string(),
            source.name,
            source.kind.name(),
            source.language,
            source.is_doppelganger as i64,
            source.is_amplifier as i64,
            source.is_active as i64,
        ],
    )
    .map_err(map_sql_err)?;
    Ok(())
}

/// Every source currently flagged active.
pub fn list_active(conn: &Connection) -> Result<Vec<Source>, StoreError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, kind, language, is_doppelganger, is_amplifier, is_active
             FROM sources
             WHERE is_active = 1",
        )
        .map_err(map_sql_err)?;

    let rows = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            let kind: String = row.get(2)?;
            Ok(Source {
                id: decode_uuid(0, &id)?,
                name: row.get(1)?,
                kind: SourceKind::parse(&kind).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        Type::Text,
                        format!("unknown source kind '{kind}'").into(),
                    )
                })?,
                language: row.get(3)?,
                is_doppelganger: row.get::<_, i64>(4)? != 0,
                is_amplifier: row.get::<_, i64>(5)? != 0,
                is_active: row.get::<_, i64>(6)? != 0,
            })
        })
        .map_err(map_sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_sql_err)?;

    Ok(rows)
}
