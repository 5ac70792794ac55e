//! The SQLite-backed propagation store.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use spoor_core::errors::StoreError;
use spoor_core::model::{ContentItem, PropagationLink, Source};
use spoor_core::traits::PropagationStore;
use tracing::debug;

use crate::connection;
use crate::migrations;
use crate::queries;

/// SQLite-backed store, one connection per instance.
///
/// Instances are not shared across threads; concurrent runs each open
/// their own store against the same database file and rely on WAL mode
/// to read without blocking.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a file-backed store, creating and migrating it as needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = connection::open_file(path)?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory store with the full schema applied.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Raw connection access for maintenance jobs and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn insert_source(&self, source: &Source) -> Result<(), StoreError> {
        queries::sources::insert(&self.conn, source)
    }

    pub fn insert_content(&self, item: &ContentItem) -> Result<(), StoreError> {
        queries::content::insert(&self.conn, item)
    }

    pub fn insert_link(&self, link: &PropagationLink) -> Result<(), StoreError> {
        queries::links::insert(&self.conn, link)
    }
}

impl PropagationStore for SqliteStore {
    fn list_active_sources(&self) -> Result<Vec<Source>, StoreError> {
        let sources = queries::sources::list_active(&self.conn)?;
        debug!(count = sources.len(), "listed active sources");
        Ok(sources)
    }

    fn list_links_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PropagationLink>, StoreError> {
        let links = queries::links::list_since(&self.conn, since)?;
        debug!(count = links.len(), since = %since, "listed propagation links");
        Ok(links)
    }

    fn list_published_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ContentItem>, StoreError> {
        let items = queries::content::list_published_since(&self.conn, since)?;
        debug!(count = items.len(), since = %since, "listed published content");
        Ok(items)
    }
}
