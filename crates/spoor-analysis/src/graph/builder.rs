//! Graph construction from windowed propagation links.

use spoor_core::model::{PropagationLink, Source};
use spoor_core::types::collections::FxHashMap;
use tracing::info;
use uuid::Uuid;

use super::types::{ContentGraph, PropagationEdge, SourceGraph, SourceNode};

/// Build the content-level graph from `links`.
///
/// A link carrying a similarity score below `min_similarity` is dropped,
/// an explicit 0.0 included; unscored links always pass. One edge per
/// content pair, last write wins.
pub fn build_content_graph(links: &[PropagationLink], min_similarity: f64) -> ContentGraph {
    let mut graph = ContentGraph::new();

    for link in links {
        if let Some(similarity) = link.similarity {
            if similarity < min_similarity {
                continue;
            }
        }
        graph.upsert_edge(
            link.source_content_id,
            link.target_content_id,
            PropagationEdge {
                kind: link.kind,
                similarity: link.similarity.unwrap_or(0.0),
                mutated: link.mutated,
                time_delta_secs: link.time_delta_secs.unwrap_or(0),
            },
        );
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built content graph"
    );
    graph
}

/// Build the source-level graph.
///
/// One node per active source; one directed edge per ordered owner pair,
/// weighted by the number of links between them. Links with an unknown
/// owner on either end and links between items of the same owner
/// contribute nothing. Owners that only appear in links still get a
/// placeholder node so their edges have somewhere to attach.
pub fn build_source_graph(sources: &[Source], links: &[PropagationLink]) -> SourceGraph {
    let mut graph = SourceGraph::new();

    for source in sources {
        graph.add_source(SourceNode::from_source(source));
    }

    // Aggregate before touching the graph: edge mutation stays
    // proportional to distinct pairs rather than raw links.
    let mut pair_counts: FxHashMap<(Uuid, Uuid), u64> = FxHashMap::default();
    for link in links {
        if let (Some(src), Some(tgt)) = (link.source_owner, link.target_owner) {
            if src != tgt {
                *pair_counts.entry((src, tgt)).or_default() += 1;
            }
        }
    }

    for ((src, tgt), weight) in pair_counts {
        graph.add_weighted_edge(src, tgt, weight);
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built source graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spoor_core::model::{PropagationKind, SourceKind};

    fn source(name: &str) -> Source {
        Source {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: SourceKind::Telegram,
            language: None,
            is_doppelganger: false,
            is_amplifier: false,
            is_active: true,
        }
    }

    fn link(
        source_content: Uuid,
        target_content: Uuid,
        similarity: Option<f64>,
    ) -> PropagationLink {
        PropagationLink {
            source_content_id: source_content,
            target_content_id: target_content,
            kind: PropagationKind::Similar,
            similarity,
            mutated: false,
            time_delta_secs: Some(300),
            source_owner: None,
            target_owner: None,
            recorded_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn owned_link(src_owner: Uuid, tgt_owner: Uuid) -> PropagationLink {
        let mut l = link(Uuid::new_v4(), Uuid::new_v4(), None);
        l.source_owner = Some(src_owner);
        l.target_owner = Some(tgt_owner);
        l
    }

    #[test]
    fn test_similarity_gate_drops_low_scores() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let links = vec![
            link(a, b, Some(0.9)),
            link(a, c, Some(0.3)),
            link(b, c, Some(0.0)),
        ];

        let graph = build_content_graph(&links, 0.5);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edge(a, b).is_some());
        assert!(graph.edge(a, c).is_none());
        assert!(graph.edge(b, c).is_none());
    }

    #[test]
    fn test_unscored_links_always_pass() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let graph = build_content_graph(&[link(a, b, None)], 0.5);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge(a, b).unwrap();
        assert_eq!(edge.similarity, 0.0);
        assert_eq!(edge.time_delta_secs, 300);
    }

    #[test]
    fn test_similarity_at_threshold_passes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let graph = build_content_graph(&[link(a, b, Some(0.5))], 0.5);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_content_pair_keeps_last_edge() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut first = link(a, b, Some(0.6));
        first.kind = PropagationKind::Forward;
        let second = link(a, b, Some(0.8));

        let graph = build_content_graph(&[first, second], 0.5);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge(a, b).unwrap();
        assert_eq!(edge.kind, PropagationKind::Similar);
        assert_eq!(edge.similarity, 0.8);
    }

    #[test]
    fn test_source_edges_count_links_per_owner_pair() {
        let a = source("a");
        let b = source("b");
        let links = vec![
            owned_link(a.id, b.id),
            owned_link(a.id, b.id),
            owned_link(b.id, a.id),
        ];

        let graph = build_source_graph(&[a.clone(), b.clone()], &links);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(a.id, b.id), Some(2));
        assert_eq!(graph.edge_weight(b.id, a.id), Some(1));
    }

    #[test]
    fn test_same_owner_and_unresolved_links_ignored() {
        let a = source("a");
        let mut half_resolved = owned_link(a.id, a.id);
        half_resolved.target_owner = None;
        let links = vec![owned_link(a.id, a.id), half_resolved];

        let graph = build_source_graph(&[a.clone()], &links);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unlisted_owner_gets_placeholder_node() {
        let a = source("a");
        let ghost = Uuid::new_v4();
        let graph = build_source_graph(&[a.clone()], &[owned_link(a.id, ghost)]);

        assert_eq!(graph.node_count(), 2);
        let idx = graph.index_of(ghost).unwrap();
        let node = graph.node(idx);
        assert_eq!(node.name, ghost.to_string());
        assert_eq!(node.category, "unknown");
        assert!(!node.is_doppelganger);
        assert_eq!(graph.edge_weight(a.id, ghost), Some(1));
    }

    #[test]
    fn test_active_sources_become_nodes_even_without_links() {
        let a = source("a");
        let b = source("b");
        let graph = build_source_graph(&[a, b], &[]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_inputs_build_empty_graphs() {
        assert_eq!(build_content_graph(&[], 0.5).node_count(), 0);
        let graph = build_source_graph(&[], &[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_source_node_attributes_mirror_record() {
        let mut a = source("observer");
        a.kind = SourceKind::Factcheck;
        a.language = Some("de".to_string());
        a.is_amplifier = true;

        let graph = build_source_graph(&[a.clone()], &[]);
        let node = graph.node(graph.index_of(a.id).unwrap());
        assert_eq!(node.name, "observer");
        assert_eq!(node.category, "factcheck");
        assert_eq!(node.language, "de");
        assert!(node.is_amplifier);
    }
}
