//! PageRank over the source graph.

use petgraph::visit::EdgeRef;
use petgraph::Direction;
use spoor_core::constants::{PAGERANK_DAMPING, PAGERANK_MAX_ITERATIONS, PAGERANK_TOLERANCE};
use spoor_core::errors::CentralityError;
use spoor_core::types::collections::FxHashMap;
use tracing::debug;
use uuid::Uuid;

use crate::graph::SourceGraph;

/// Converged scores keyed by source id. Scores sum to 1 over the graph.
#[derive(Debug)]
pub struct PageRankScores {
    pub scores: FxHashMap<Uuid, f64>,
    pub iterations: usize,
}

/// Weighted PageRank by power iteration.
///
/// Rank flows along outgoing edges proportionally to their weights, and
/// dangling nodes spread theirs over the whole graph. Converged means
/// the L1 delta between successive score vectors dropped below the
/// tolerance scaled by node count; burning the full iteration budget
/// without that is an error so callers can fall back.
pub fn pagerank(graph: &SourceGraph) -> Result<PageRankScores, CentralityError> {
    let g = &graph.graph;
    let nodes: Vec<_> = g.node_indices().collect();
    let n = nodes.len();

    if n == 0 {
        return Ok(PageRankScores {
            scores: FxHashMap::default(),
            iterations: 0,
        });
    }

    let pos: FxHashMap<_, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &idx)| (idx, i))
        .collect();

    // Total outgoing weight per node; zero marks a dangling node.
    let out_weight: Vec<f64> = nodes
        .iter()
        .map(|&idx| {
            g.edges_directed(idx, Direction::Outgoing)
                .map(|e| *e.weight() as f64)
                .sum()
        })
        .collect();

    let damping = PAGERANK_DAMPING;
    let base = (1.0 - damping) / n as f64;
    let mut scores = vec![1.0 / n as f64; n];
    let mut next = vec![0.0_f64; n];

    let mut delta = f64::INFINITY;
    for iteration in 1..=PAGERANK_MAX_ITERATIONS {
        for slot in next.iter_mut() {
            *slot = base;
        }

        for (u, &u_idx) in nodes.iter().enumerate() {
            if out_weight[u] == 0.0 {
                let share = damping * scores[u] / n as f64;
                for slot in next.iter_mut() {
                    *slot += share;
                }
            } else {
                let rank = damping * scores[u] / out_weight[u];
                for edge in g.edges_directed(u_idx, Direction::Outgoing) {
                    next[pos[&edge.target()]] += rank * *edge.weight() as f64;
                }
            }
        }

        delta = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);

        if delta < PAGERANK_TOLERANCE * n as f64 {
            debug!(iterations = iteration, "pagerank converged");
            let scores = nodes
                .iter()
                .zip(scores)
                .map(|(&idx, score)| (g[idx].id, score))
                .collect();
            return Ok(PageRankScores {
                scores,
                iterations: iteration,
            });
        }
    }

    Err(CentralityError::NonConvergence {
        iterations: PAGERANK_MAX_ITERATIONS,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SourceGraph;

    fn ring(n: usize) -> (SourceGraph, Vec<Uuid>) {
        let mut graph = SourceGraph::new();
        let ids: Vec<Uuid> = (0..n).map(|_| Uuid::new_v4()).collect();
        for i in 0..n {
            graph.add_weighted_edge(ids[i], ids[(i + 1) % n], 1);
        }
        (graph, ids)
    }

    #[test]
    fn test_empty_graph_yields_no_scores() {
        let result = pagerank(&SourceGraph::new()).unwrap();
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_single_node_scores_one() {
        let mut graph = SourceGraph::new();
        graph.add_source(crate::graph::SourceNode::placeholder(Uuid::new_v4()));
        let result = pagerank(&graph).unwrap();
        let score = result.scores.values().next().copied().unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_is_uniform_and_sums_to_one() {
        let (graph, ids) = ring(5);
        let result = pagerank(&graph).unwrap();

        let total: f64 = result.scores.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
        for id in &ids {
            assert!((result.scores[id] - 0.2).abs() < 1e-6);
        }
        assert!(result.iterations < PAGERANK_MAX_ITERATIONS);
    }

    #[test]
    fn test_sink_accumulates_rank() {
        // a -> c, b -> c: the sink must outrank its feeders.
        let mut graph = SourceGraph::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        graph.add_weighted_edge(a, c, 1);
        graph.add_weighted_edge(b, c, 1);

        let scores = pagerank(&graph).unwrap().scores;
        assert!(scores[&c] > scores[&a]);
        assert!(scores[&c] > scores[&b]);
        let total: f64 = scores.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heavier_edge_attracts_more_rank() {
        // a splits rank 4:1 between b and c.
        let mut graph = SourceGraph::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        graph.add_weighted_edge(a, b, 4);
        graph.add_weighted_edge(a, c, 1);

        let scores = pagerank(&graph).unwrap().scores;
        assert!(scores[&b] > scores[&c]);
    }
}
