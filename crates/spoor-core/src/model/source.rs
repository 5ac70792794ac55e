//! Monitored sources and their categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a monitored source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Telegram,
    Domain,
    Media,
    Factcheck,
    Social,
}

impl SourceKind {
    /// Stable lowercase name, also the database representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Domain => "domain",
            Self::Media => "media",
            Self::Factcheck => "factcheck",
            Self::Social => "social",
        }
    }

    /// Parse the database representation back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "telegram" => Some(Self::Telegram),
            "domain" => Some(Self::Domain),
            "media" => Some(Self::Media),
            "factcheck" => Some(Self::Factcheck),
            "social" => Some(Self::Social),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A monitored actor that publishes content.
///
/// Doppelganger and amplifier flags come from upstream classification and
/// are carried through to graph exports and superspreader records
/// untouched. Inactive sources never enter the source graph as primary
/// nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: Uuid,
    pub name: String,
    pub kind: SourceKind,
    pub language: Option<String>,
    pub is_doppelganger: bool,
    pub is_amplifier: bool,
    pub is_active: bool,
}
