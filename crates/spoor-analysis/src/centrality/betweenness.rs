//! Betweenness centrality via Brandes' algorithm.

use std::collections::VecDeque;

use petgraph::Direction;
use spoor_core::types::collections::FxHashMap;
use uuid::Uuid;

use crate::graph::SourceGraph;

/// Shortest-path betweenness for every node, keyed by source id.
///
/// Paths follow edge direction and hop count; weights play no role.
/// Scores are normalized by 1/((n-1)(n-2)) once the graph has more than
/// two nodes, the usual directed-graph convention. Total function: any
/// graph, including empty, yields a map.
pub fn betweenness(graph: &SourceGraph) -> FxHashMap<Uuid, f64> {
    let g = &graph.graph;
    let nodes: Vec<_> = g.node_indices().collect();
    let n = nodes.len();
    let pos: FxHashMap<_, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &idx)| (idx, i))
        .collect();

    let mut bc = vec![0.0_f64; n];

    for s in 0..n {
        // Forward BFS accumulating shortest-path counts and predecessors.
        let mut stack = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        let mut delta = vec![0.0_f64; n];

        sigma[s] = 1.0;
        dist[s] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for neighbor in g.neighbors_directed(nodes[v], Direction::Outgoing) {
                let w = pos[&neighbor];
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Back-propagate pair dependencies in reverse BFS order.
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                bc[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for score in bc.iter_mut() {
            *score *= scale;
        }
    }

    nodes
        .iter()
        .zip(bc)
        .map(|(&idx, score)| (g[idx].id, score))
        .collect()
}
