//! Domain model: sources, content, propagation links, and the derived
//! per-run report records.

pub mod content;
pub mod propagation;
pub mod report;
pub mod source;

pub use content::ContentItem;
pub use propagation::{PropagationKind, PropagationLink};
pub use report::{
    CommunityBreakdown, CoordinatedBurst, NetworkReport, NetworkStats, PropagationPatterns,
    Superspreader,
};
pub use source::{Source, SourceKind};
