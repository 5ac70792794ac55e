//! v001: initial schema for sources, content, and propagation events.

pub const MIGRATION_SQL: &str = r#"
-- Monitored sources (actors). Flags come from upstream classification.
CREATE TABLE IF NOT EXISTS sources (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    kind TEXT NOT NULL,
    language TEXT,
    is_doppelganger INTEGER NOT NULL DEFAULT 0,
    is_amplifier INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;

-- Collected content items. published_at is NULL when the collector could
-- not recover a publication time; such rows are invisible to temporal
-- analysis. Timestamps are unix seconds. source_id is a soft reference:
-- collectors may record content before its source is registered.
CREATE TABLE IF NOT EXISTS content (
    id TEXT PRIMARY KEY,
    source_id TEXT,
    published_at INTEGER,
    language TEXT,
    collected_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;

CREATE INDEX IF NOT EXISTS idx_content_source ON content(source_id);
CREATE INDEX IF NOT EXISTS idx_content_published ON content(published_at)
    WHERE published_at IS NOT NULL;

-- Directed propagation events between content items. Endpoint ids are
-- soft references too: a link can outlive or precede its endpoints, and
-- owner resolution LEFT JOINs through the content table at read time.
CREATE TABLE IF NOT EXISTS propagation (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source_content_id TEXT NOT NULL,
    target_content_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    similarity REAL,
    mutated INTEGER NOT NULL DEFAULT 0,
    time_delta_secs INTEGER,
    recorded_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;

CREATE INDEX IF NOT EXISTS idx_propagation_recorded ON propagation(recorded_at);
CREATE INDEX IF NOT EXISTS idx_propagation_source ON propagation(source_content_id);
CREATE INDEX IF NOT EXISTS idx_propagation_target ON propagation(target_content_id);
"#;
