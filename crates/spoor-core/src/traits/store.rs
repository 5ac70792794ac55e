//! Read contract between the analysis core and persistence.
//!
//! Analysis only ever reads in bulk; writes stay behind the concrete
//! store types. `MemoryStore` is the vector-backed implementation used
//! by tests and by embedders that do not want SQLite.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::model::{ContentItem, PropagationLink, Source};

/// Bulk read access to sources, content, and propagation links.
///
/// `Send` but deliberately not `Sync`: every run owns its store
/// exclusively, and the SQLite implementation wraps a connection that
/// cannot be shared across threads.
pub trait PropagationStore: Send {
    /// Every source currently flagged active.
    fn list_active_sources(&self) -> Result<Vec<Source>, StoreError>;

    /// Propagation links recorded at or after `since`, with the owning
    /// source of each endpoint resolved where known.
    fn list_links_since(&self, since: DateTime<Utc>)
        -> Result<Vec<PropagationLink>, StoreError>;

    /// Content with a known publication timestamp at or after `since`,
    /// ordered by publication time ascending.
    fn list_published_since(&self, since: DateTime<Utc>)
        -> Result<Vec<ContentItem>, StoreError>;
}

/// In-memory store backed by plain vectors.
///
/// Owner resolution mirrors the SQLite store: the owner recorded on an
/// inserted link is ignored and re-derived from the content table at
/// read time.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sources: Vec<Source>,
    content: Vec<ContentItem>,
    links: Vec<PropagationLink>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, source: Source) {
        self.sources.push(source);
    }

    pub fn add_content(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    pub fn add_link(&mut self, link: PropagationLink) {
        self.links.push(link);
    }

    fn owner_of(&self, content_id: Uuid) -> Option<Uuid> {
        self.content
            .iter()
            .find(|c| c.id == content_id)
            .and_then(|c| c.source_id)
    }
}

impl PropagationStore for MemoryStore {
    fn list_active_sources(&self) -> Result<Vec<Source>, StoreError> {
        Ok(self
            .sources
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }

    fn list_links_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PropagationLink>, StoreError> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.recorded_at >= since)
            .cloned()
            .map(|mut link| {
                link.source_owner = self.owner_of(link.source_content_id);
                link.target_owner = self.owner_of(link.target_content_id);
                link
            })
            .collect())
    }

    fn list_published_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ContentItem>, StoreError> {
        let mut items: Vec<ContentItem> = self
            .content
            .iter()
            .filter(|c| c.published_at.is_some_and(|at| at >= since))
            .cloned()
            .collect();
        items.sort_by_key(|c| c.published_at);
        Ok(items)
    }
}
