//! Centrality metrics and the combined superspreader ranking.

pub mod betweenness;
pub mod pagerank;
pub mod superspreaders;

pub use superspreaders::find_superspreaders;
