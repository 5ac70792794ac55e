//! Derived records assembled into the per-run network report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::collections::{BTreeMap, FxHashMap, SmallVec10};

/// One ranked source from the superspreader analysis.
///
/// `category` and `name` are display strings mirrored from the graph
/// node; unresolved placeholder nodes carry `"unknown"` and their id
/// rendered as the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superspreader {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub out_degree: usize,
    pub pagerank: f64,
    pub betweenness: f64,
    pub score: f64,
    pub is_doppelganger: bool,
}

/// A detected burst of near-simultaneous publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatedBurst {
    /// Publication time of the anchor item.
    pub timestamp: DateTime<Utc>,
    pub content_count: usize,
    pub unique_sources: usize,
    /// Configured window width the burst was detected under.
    pub window_secs: i64,
    /// Sample of item ids in the window, capped at ten.
    pub content_ids: SmallVec10<Uuid>,
}

/// Summary statistics over the source graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Directed density, `edges / (nodes * (nodes - 1))`; zero below two
    /// nodes.
    pub density: f64,
    pub community_count: usize,
    /// Mean of in-degree plus out-degree.
    pub avg_degree: f64,
    /// Weak connectivity of the undirected projection.
    pub is_connected: bool,
}

/// Aggregate profile of the window's propagation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagationPatterns {
    pub total: usize,
    /// Link counts keyed by propagation kind name.
    pub by_kind: BTreeMap<String, usize>,
    pub mutations: usize,
    /// Mean time delta in seconds over links with a positive delta.
    pub avg_time_delta_secs: f64,
    /// Links that propagated in under one hour.
    pub within_hour: usize,
    /// Links that propagated in under one day.
    pub within_day: usize,
}

/// Community partition of the source graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityBreakdown {
    pub count: usize,
    /// Source id to community id; ids are contiguous from zero.
    pub partition: FxHashMap<Uuid, u64>,
}

/// Everything one full analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub generated_at: DateTime<Utc>,
    /// Lookback window the run covered, in days.
    pub period_days: i64,
    pub stats: NetworkStats,
    pub superspreaders: Vec<Superspreader>,
    pub propagation_patterns: PropagationPatterns,
    pub coordinated_behavior: Vec<CoordinatedBurst>,
    /// Present only when the graph was large enough for community
    /// detection to run.
    pub communities: Option<CommunityBreakdown>,
    /// Path of the GEXF export, when exporting was enabled and the graph
    /// was non-empty.
    pub export_path: Option<PathBuf>,
}
