//! Analysis window and detection thresholds.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trailing window of propagation events considered per run, in days.
    pub lookback_days: i64,
    /// Minimum similarity for a scored link to enter the content graph.
    /// Links without a score always pass.
    pub min_similarity: f64,
    /// Number of ranked superspreaders kept in the report.
    pub top_superspreaders: usize,
    /// Width of the coordination detection window, in seconds.
    pub coordination_window_secs: i64,
    /// Minimum distinct sources (and items) for a window to count as a
    /// coordinated burst.
    pub coordination_min_sources: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            min_similarity: defaults::DEFAULT_MIN_SIMILARITY,
            top_superspreaders: defaults::DEFAULT_TOP_SUPERSPREADERS,
            coordination_window_secs: defaults::DEFAULT_COORDINATION_WINDOW_SECS,
            coordination_min_sources: defaults::DEFAULT_COORDINATION_MIN_SOURCES,
        }
    }
}
