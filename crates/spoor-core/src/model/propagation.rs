//! Propagation links between content items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How content moved from one item to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropagationKind {
    Forward,
    Quote,
    Repost,
    Mention,
    Link,
    Similar,
}

impl PropagationKind {
    /// Stable lowercase name, also the database representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Quote => "quote",
            Self::Repost => "repost",
            Self::Mention => "mention",
            Self::Link => "link",
            Self::Similar => "similar",
        }
    }

    /// Parse the database representation back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(Self::Forward),
            "quote" => Some(Self::Quote),
            "repost" => Some(Self::Repost),
            "mention" => Some(Self::Mention),
            "link" => Some(Self::Link),
            "similar" => Some(Self::Similar),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropagationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A directed propagation event between two content items.
///
/// The store resolves the owning source of each endpoint before handing
/// links to the analysis core; an owner stays `None` when the endpoint
/// content is missing or has no attributed source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagationLink {
    pub source_content_id: Uuid,
    pub target_content_id: Uuid,
    pub kind: PropagationKind,
    /// Text similarity in [0, 1]; absent when the upstream detector did
    /// not score the pair.
    pub similarity: Option<f64>,
    pub mutated: bool,
    /// Seconds between source and target publication, when both are known.
    pub time_delta_secs: Option<i64>,
    pub source_owner: Option<Uuid>,
    pub target_owner: Option<Uuid>,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceKind;

    #[test]
    fn test_propagation_kind_names_round_trip() {
        for kind in [
            PropagationKind::Forward,
            PropagationKind::Quote,
            PropagationKind::Repost,
            PropagationKind::Mention,
            PropagationKind::Link,
            PropagationKind::Similar,
        ] {
            assert_eq!(PropagationKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(PropagationKind::parse("retweet"), None);
    }

    #[test]
    fn test_source_kind_names_round_trip() {
        for kind in [
            SourceKind::Telegram,
            SourceKind::Domain,
            SourceKind::Media,
            SourceKind::Factcheck,
            SourceKind::Social,
        ] {
            assert_eq!(SourceKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(SourceKind::parse("rss"), None);
    }
}
