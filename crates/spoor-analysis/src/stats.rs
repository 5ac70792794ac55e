//! Network-level summary statistics.

use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use spoor_core::model::NetworkStats;
use spoor_core::types::collections::FxHashMap;

use crate::graph::SourceGraph;

/// Compute the summary record for a source graph.
///
/// Density assumes a directed simple graph without self-loops. The
/// community count is supplied by the caller; this aggregator never runs
/// community detection itself.
pub fn network_stats(graph: &SourceGraph, community_count: usize) -> NetworkStats {
    let nodes = graph.node_count();
    let edges = graph.edge_count();

    let density = if nodes < 2 {
        0.0
    } else {
        edges as f64 / (nodes as f64 * (nodes - 1) as f64)
    };

    let avg_degree = if nodes == 0 {
        0.0
    } else {
        let total: usize = graph
            .graph
            .node_indices()
            .map(|idx| graph.total_degree(idx))
            .sum();
        total as f64 / nodes as f64
    };

    NetworkStats {
        node_count: nodes,
        edge_count: edges,
        density,
        community_count,
        avg_degree,
        is_connected: is_weakly_connected(graph),
    }
}

/// Weak connectivity of the undirected projection via union-find.
/// An empty graph is not connected; a single node is.
fn is_weakly_connected(graph: &SourceGraph) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return false;
    }

    let pos: FxHashMap<_, usize> = graph
        .graph
        .node_indices()
        .enumerate()
        .map(|(i, idx)| (idx, i))
        .collect();

    let mut forest = UnionFind::new(n);
    for edge in graph.graph.edge_references() {
        forest.union(pos[&edge.source()], pos[&edge.target()]);
    }

    let root = forest.find(0);
    (1..n).all(|i| forest.find(i) == root)
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}
