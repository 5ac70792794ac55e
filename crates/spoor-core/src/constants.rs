//! Algorithm constants shared across the analysis crates.
//!
//! The scoring weights and scale factors are heuristics carried over from
//! the first deployment and are deliberately not configurable; changing
//! them silently reorders every historical ranking.

/// Damping factor for PageRank power iteration.
pub const PAGERANK_DAMPING: f64 = 0.85;

/// Iteration cap for PageRank; exceeding it without converging is an error.
pub const PAGERANK_MAX_ITERATIONS: usize = 100;

/// PageRank convergence tolerance. The L1 delta between successive score
/// vectors must drop below this value scaled by the node count.
pub const PAGERANK_TOLERANCE: f64 = 1e-6;

/// Sweep cap for community detection local moves.
pub const LOUVAIN_MAX_SWEEPS: usize = 100;

/// Minimum node count for community detection to run at all.
pub const COMMUNITY_MIN_NODES: usize = 2;

/// Superspreader score weight on raw out-degree.
pub const WEIGHT_OUT_DEGREE: f64 = 0.4;

/// Superspreader score weight on scaled PageRank.
pub const WEIGHT_PAGERANK: f64 = 0.4;

/// Superspreader score weight on scaled betweenness.
pub const WEIGHT_BETWEENNESS: f64 = 0.2;

/// Brings PageRank (a fraction summing to 1) up to out-degree magnitude.
pub const PAGERANK_SCALE: f64 = 100.0;

/// Brings normalized betweenness up to out-degree magnitude.
pub const BETWEENNESS_SCALE: f64 = 10.0;

/// Maximum content ids sampled into a coordinated-burst record.
pub const BURST_SAMPLE_CAP: usize = 10;

/// Seconds in one hour, the fast-propagation bucket boundary.
pub const SECS_PER_HOUR: i64 = 3_600;

/// Seconds in one day, the same-day propagation bucket boundary.
pub const SECS_PER_DAY: i64 = 86_400;
