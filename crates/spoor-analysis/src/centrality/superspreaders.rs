//! Superspreader ranking by combined centrality score.

use spoor_core::constants::{
    BETWEENNESS_SCALE, PAGERANK_SCALE, WEIGHT_BETWEENNESS, WEIGHT_OUT_DEGREE, WEIGHT_PAGERANK,
};
use spoor_core::model::Superspreader;
use spoor_core::types::collections::FxHashMap;
use tracing::warn;
use uuid::Uuid;

use crate::centrality::betweenness::betweenness;
use crate::centrality::pagerank::pagerank;
use crate::graph::SourceGraph;

/// Score every node and keep the `top_n` highest.
///
/// Out-degree is a raw count while PageRank and betweenness are
/// normalized fractions, so the scale factors bring the three terms into
/// comparable magnitude before weighting. When PageRank fails to
/// converge the ranking proceeds with zero PageRank for every node
/// rather than aborting the run.
pub fn find_superspreaders(graph: &SourceGraph, top_n: usize) -> Vec<Superspreader> {
    if graph.node_count() == 0 {
        return Vec::new();
    }

    let pagerank_scores: FxHashMap<Uuid, f64> = match pagerank(graph) {
        Ok(result) => result.scores,
        Err(e) => {
            warn!(error = %e, "pagerank unavailable, scoring with zeros");
            FxHashMap::default()
        }
    };
    let betweenness_scores = betweenness(graph);

    let mut ranked: Vec<Superspreader> = graph
        .graph
        .node_indices()
        .map(|idx| {
            let node = graph.node(idx);
            let out_degree = graph.out_degree(idx);
            let pagerank = pagerank_scores.get(&node.id).copied().unwrap_or(0.0);
            let betweenness = betweenness_scores.get(&node.id).copied().unwrap_or(0.0);
            let score = WEIGHT_OUT_DEGREE * out_degree as f64
                + WEIGHT_PAGERANK * (PAGERANK_SCALE * pagerank)
                + WEIGHT_BETWEENNESS * (BETWEENNESS_SCALE * betweenness);
            Superspreader {
                id: node.id,
                name: node.name.clone(),
                category: node.category.clone(),
                out_degree,
                pagerank,
                betweenness,
                score,
                is_doppelganger: node.is_doppelganger,
            }
        })
        .collect();

    // Stable sort: exact ties keep graph insertion order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}
