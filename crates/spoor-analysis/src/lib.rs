//! # spoor-analysis
//!
//! The propagation analysis engine. Builds content and source graphs
//! from windowed propagation links, ranks superspreaders by combined
//! centrality, partitions the source network into communities, detects
//! coordinated posting bursts, and assembles everything into a per-run
//! network report with an optional GEXF export.

pub mod analyzer;
pub mod centrality;
pub mod community;
pub mod coordination;
pub mod export;
pub mod graph;
pub mod patterns;
pub mod runner;
pub mod stats;

pub use analyzer::NetworkAnalyzer;
pub use runner::BatchRunner;
