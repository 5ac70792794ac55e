//! Content items published by sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single collected content item.
///
/// The owning source can be unknown for scraped items whose author was
/// never resolved. Items without a publication timestamp are excluded
/// from every temporal analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub source_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
}
