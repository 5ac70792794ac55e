//! Graph wrapper types: petgraph storage plus id-keyed node lookup.

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::{Directed, Direction};
use spoor_core::model::{PropagationKind, Source};
use spoor_core::types::collections::FxHashMap;
use uuid::Uuid;

/// Attributes carried by a content-graph edge.
///
/// Absent similarity and time delta collapse to zero here; the content
/// graph is a display/inspection structure, not a statistics input.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationEdge {
    pub kind: PropagationKind,
    pub similarity: f64,
    pub mutated: bool,
    pub time_delta_secs: i64,
}

/// Directed graph of content items linked by propagation events.
///
/// Rebuilt from scratch on every run and never persisted.
pub struct ContentGraph {
    pub graph: StableGraph<Uuid, PropagationEdge, Directed>,
    pub node_index: FxHashMap<Uuid, NodeIndex>,
}

impl ContentGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert the node for `id` if missing, returning its index either way.
    pub fn ensure_node(&mut self, id: Uuid) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }

    /// Add the edge between two content ids, replacing any previous edge
    /// for the pair. Endpoints are inserted on demand.
    pub fn upsert_edge(&mut self, source: Uuid, target: Uuid, edge: PropagationEdge) {
        let a = self.ensure_node(source);
        let b = self.ensure_node(target);
        self.graph.update_edge(a, b, edge);
    }

    /// Edge attributes between two content ids, if the edge exists.
    pub fn edge(&self, source: Uuid, target: Uuid) -> Option<&PropagationEdge> {
        let a = *self.node_index.get(&source)?;
        let b = *self.node_index.get(&target)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }
}

impl Default for ContentGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Display attributes mirrored onto a source-graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub language: String,
    pub is_doppelganger: bool,
    pub is_amplifier: bool,
}

impl SourceNode {
    /// Node attributes for a known source record.
    pub fn from_source(source: &Source) -> Self {
        Self {
            id: source.id,
            name: source.name.clone(),
            category: source.kind.name().to_string(),
            language: source
                .language
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            is_doppelganger: source.is_doppelganger,
            is_amplifier: source.is_amplifier,
        }
    }

    /// Bare node for an owner id that appears in links but is missing
    /// from the active-source set.
    pub fn placeholder(id: Uuid) -> Self {
        Self {
            id,
            name: id.to_string(),
            category: "unknown".to_string(),
            language: "unknown".to_string(),
            is_doppelganger: false,
            is_amplifier: false,
        }
    }
}

/// Directed graph of sources. Edge weights count the propagation events
/// between the two owners inside the analysis window.
pub struct SourceGraph {
    pub graph: StableGraph<SourceNode, u64, Directed>,
    pub node_index: FxHashMap<Uuid, NodeIndex>,
}

impl SourceGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert a node if its id is new, returning the index either way.
    /// An existing node keeps its original attributes.
    pub fn add_source(&mut self, node: SourceNode) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&node.id) {
            return idx;
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        idx
    }

    /// Add a weighted edge between two owner ids, inserting placeholder
    /// nodes for ids the graph has not seen.
    pub fn add_weighted_edge(&mut self, source: Uuid, target: Uuid, weight: u64) {
        let a = match self.node_index.get(&source) {
            Some(&idx) => idx,
            None => self.add_source(SourceNode::placeholder(source)),
        };
        let b = match self.node_index.get(&target) {
            Some(&idx) => idx,
            None => self.add_source(SourceNode::placeholder(target)),
        };
        self.graph.update_edge(a, b, weight);
    }

    pub fn index_of(&self, id: Uuid) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &SourceNode {
        &self.graph[idx]
    }

    /// Weight of the edge from `source` to `target`, if it exists.
    pub fn edge_weight(&self, source: Uuid, target: Uuid) -> Option<u64> {
        let a = self.index_of(source)?;
        let b = self.index_of(target)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Number of outgoing edges from a node.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// In-degree plus out-degree.
    pub fn total_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
            + self.graph.edges_directed(idx, Direction::Incoming).count()
    }
}

impl Default for SourceGraph {
    fn default() -> Self {
        Self::new()
    }
}
