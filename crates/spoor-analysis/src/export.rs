//! Source-graph export to GEXF.

use std::path::{Path, PathBuf};

use chrono::Utc;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use spoor_core::errors::ExportError;
use spoor_gexf::{
    write_gexf, GexfAttrKind, GexfAttribute, GexfDocument, GexfEdge, GexfNode,
};

use crate::graph::SourceGraph;

/// Node attributes declared on every export, in declaration order.
const NODE_ATTRIBUTES: &[(&str, &str, GexfAttrKind)] = &[
    ("0", "category", GexfAttrKind::String),
    ("1", "language", GexfAttrKind::String),
    ("2", "is_doppelganger", GexfAttrKind::Boolean),
    ("3", "is_amplifier", GexfAttrKind::Boolean),
];

/// Convert a source graph into a GEXF document.
///
/// Node labels are source names; the classification flags and category
/// ride along as declared attributes so they survive into visualization
/// tools.
pub fn source_graph_document(graph: &SourceGraph) -> GexfDocument {
    let attributes = NODE_ATTRIBUTES
        .iter()
        .map(|(id, title, kind)| GexfAttribute {
            id: (*id).to_string(),
            title: (*title).to_string(),
            kind: *kind,
        })
        .collect();

    let nodes = graph
        .graph
        .node_indices()
        .map(|idx| {
            let node = graph.node(idx);
            GexfNode {
                id: node.id.to_string(),
                label: node.name.clone(),
                values: vec![
                    ("0".to_string(), node.category.clone()),
                    ("1".to_string(), node.language.clone()),
                    ("2".to_string(), node.is_doppelganger.to_string()),
                    ("3".to_string(), node.is_amplifier.to_string()),
                ],
            }
        })
        .collect();

    let edges = graph
        .graph
        .edge_references()
        .map(|edge| GexfEdge {
            source: graph.node(edge.source()).id.to_string(),
            target: graph.node(edge.target()).id.to_string(),
            weight: *edge.weight() as f64,
        })
        .collect();

    GexfDocument {
        attributes,
        nodes,
        edges,
    }
}

/// Write the source graph into `directory` under a timestamped name and
/// return the path of the written file.
pub fn export_source_graph(
    graph: &SourceGraph,
    directory: &Path,
) -> Result<PathBuf, ExportError> {
    let filename = format!("source_network_{}.gexf", Utc::now().format("%Y%m%d_%H%M%S"));
    let path = directory.join(filename);
    write_gexf(&source_graph_document(graph), &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SourceGraph;
    use uuid::Uuid;

    #[test]
    fn test_document_mirrors_graph_shape() {
        let mut graph = SourceGraph::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        graph.add_weighted_edge(a, b, 7);

        let doc = source_graph_document(&graph);
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.edge_count(), 1);
        assert_eq!(doc.edges[0].source, a.to_string());
        assert_eq!(doc.edges[0].target, b.to_string());
        assert_eq!(doc.edges[0].weight, 7.0);
        assert_eq!(doc.attributes.len(), 4);
        // Placeholder nodes still carry the full attribute set.
        assert_eq!(doc.nodes[0].values.len(), 4);
        assert_eq!(doc.nodes[0].values[0].1, "unknown");
    }

    #[test]
    fn test_export_writes_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = SourceGraph::new();
        graph.add_weighted_edge(Uuid::new_v4(), Uuid::new_v4(), 1);

        let path = export_source_graph(&graph, dir.path()).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("source_network_"));
        assert!(name.ends_with(".gexf"));
    }
}
