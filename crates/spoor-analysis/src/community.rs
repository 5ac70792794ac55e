//! Community detection by greedy modularity optimization.

use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use spoor_core::constants::{COMMUNITY_MIN_NODES, LOUVAIN_MAX_SWEEPS};
use spoor_core::types::collections::FxHashMap;
use tracing::info;
use uuid::Uuid;

use crate::graph::SourceGraph;

/// Partition the source graph into communities, keyed by source id.
///
/// Louvain on the weighted undirected projection: local moves shift
/// each node to the adjacent community with the best modularity gain
/// until a sweep moves nothing, then the partition collapses into a
/// weighted community graph and the moves repeat at that level, so
/// small clusters keep merging while modularity still improves. Gains
/// account for the node leaving its current community, so accepted
/// moves strictly improve modularity and every level terminates.
/// Reciprocal directed edges sum their weights in the projection.
/// Community ids are renumbered contiguously from zero in node order.
/// Fewer than two nodes yield an empty partition.
pub fn detect_communities(graph: &SourceGraph) -> FxHashMap<Uuid, u64> {
    let n = graph.node_count();
    if n < COMMUNITY_MIN_NODES {
        return FxHashMap::default();
    }

    let g = &graph.graph;
    let nodes: Vec<_> = g.node_indices().collect();
    let pos: FxHashMap<_, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, &idx)| (idx, i))
        .collect();

    // Undirected weighted adjacency; self-loops are excluded by
    // construction upstream but guarded anyway.
    let mut adjacency: Vec<FxHashMap<usize, f64>> = vec![FxHashMap::default(); n];
    for edge in g.edge_references() {
        let u = pos[&edge.source()];
        let v = pos[&edge.target()];
        if u == v {
            continue;
        }
        let w = *edge.weight() as f64;
        *adjacency[u].entry(v).or_default() += w;
        *adjacency[v].entry(u).or_default() += w;
    }

    let total_weight: f64 = adjacency
        .iter()
        .flat_map(|neighbors| neighbors.values())
        .sum::<f64>()
        / 2.0;

    if total_weight == 0.0 {
        // Edgeless graph: every node is its own community.
        info!(communities = n, "detected communities");
        return nodes
            .iter()
            .enumerate()
            .map(|(i, &idx)| (g[idx].id, i as u64))
            .collect();
    }

    let mut assignment: Vec<usize> = (0..n).collect();
    let mut levels = 0_usize;
    loop {
        levels += 1;
        let (labels, moved) = local_moves(&adjacency, total_weight);
        if !moved {
            break;
        }

        let (labels, count) = compress(&labels);
        for slot in assignment.iter_mut() {
            *slot = labels[*slot];
        }
        // Moves without a merge leave the collapse an identity map;
        // stop rather than rerun the same level forever.
        if count == adjacency.len() {
            break;
        }
        adjacency = aggregate(&adjacency, &labels, count);
    }

    // Renumber community labels contiguously, first seen first.
    let mut remap: FxHashMap<usize, u64> = FxHashMap::default();
    let mut next_label = 0_u64;
    let partition: FxHashMap<Uuid, u64> = nodes
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let label = *remap.entry(assignment[i]).or_insert_with(|| {
                let label = next_label;
                next_label += 1;
                label
            });
            (g[idx].id, label)
        })
        .collect();

    info!(communities = remap.len(), levels, "detected communities");
    partition
}

/// One level of local moves: sweep nodes into their best adjacent
/// community until a full sweep moves nothing. Diagonal entries carry a
/// collapsed community's internal weight; they travel with the node and
/// cancel out of the gain comparison, so they are skipped. Returns the
/// per-node labels and whether any move happened.
fn local_moves(adjacency: &[FxHashMap<usize, f64>], total_weight: f64) -> (Vec<usize>, bool) {
    let n = adjacency.len();
    let k: Vec<f64> = adjacency.iter().map(|nb| nb.values().sum()).collect();
    let mut community: Vec<usize> = (0..n).collect();
    let mut sum_tot: Vec<f64> = k.clone();
    let mut improved = false;

    for _ in 0..LOUVAIN_MAX_SWEEPS {
        let mut moved = false;

        for i in 0..n {
            let current = community[i];

            let mut neighbor_weights: FxHashMap<usize, f64> = FxHashMap::default();
            for (&j, &w) in &adjacency[i] {
                if j == i {
                    continue;
                }
                *neighbor_weights.entry(community[j]).or_default() += w;
            }

            // Evaluate every candidate with i lifted out of its community.
            sum_tot[current] -= k[i];

            let own_weight = neighbor_weights.get(&current).copied().unwrap_or(0.0);
            let mut best = current;
            let mut best_gain = gain(own_weight, k[i], sum_tot[current], total_weight);

            for (&candidate, &w_ic) in &neighbor_weights {
                if candidate == current {
                    continue;
                }
                let candidate_gain = gain(w_ic, k[i], sum_tot[candidate], total_weight);
                if candidate_gain > best_gain {
                    best_gain = candidate_gain;
                    best = candidate;
                }
            }

            sum_tot[best] += k[i];
            if best != current {
                community[i] = best;
                moved = true;
            }
        }

        if moved {
            improved = true;
        } else {
            break;
        }
    }

    (community, improved)
}

/// Relabel communities contiguously from zero in first-seen node order.
fn compress(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut remap: FxHashMap<usize, usize> = FxHashMap::default();
    let mut compact = Vec::with_capacity(labels.len());
    for &label in labels {
        let next = remap.len();
        compact.push(*remap.entry(label).or_insert(next));
    }
    (compact, remap.len())
}

/// Collapse a partition into its community graph. Weight between two
/// communities lands on the edge between them; weight inside one
/// community lands on its diagonal, once per direction, keeping node
/// degrees and the total weight identical across levels.
fn aggregate(
    adjacency: &[FxHashMap<usize, f64>],
    labels: &[usize],
    count: usize,
) -> Vec<FxHashMap<usize, f64>> {
    let mut collapsed: Vec<FxHashMap<usize, f64>> = vec![FxHashMap::default(); count];
    for (i, neighbors) in adjacency.iter().enumerate() {
        for (&j, &w) in neighbors {
            *collapsed[labels[i]].entry(labels[j]).or_default() += w;
        }
    }
    collapsed
}

/// Modularity gain of placing a node with weighted degree `k_i` and
/// `w_ic` weight into a community with total degree `sum_tot_c`.
fn gain(w_ic: f64, k_i: f64, sum_tot_c: f64, m: f64) -> f64 {
    w_ic / m - k_i * sum_tot_c / (2.0 * m * m)
}
