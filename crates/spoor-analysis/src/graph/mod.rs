//! Propagation graphs: wrapper types and construction.

pub mod builder;
pub mod types;

pub use builder::{build_content_graph, build_source_graph};
pub use types::{ContentGraph, PropagationEdge, SourceGraph, SourceNode};
