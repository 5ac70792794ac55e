//! GEXF writer.
//!
//! Builds the XML by hand; the emitted subset is small enough that an
//! explicit writer stays simpler than a serializer framework.

use std::fmt::Write as _;
use std::path::Path;

use spoor_core::errors::ExportError;
use tracing::info;

use crate::document::GexfDocument;

/// Serialize `doc` to a GEXF file at `path`, creating parent directories
/// as needed.
pub fn write_gexf(doc: &GexfDocument, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::CreateDir {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    std::fs::write(path, render_gexf(doc)).map_err(|e| ExportError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        nodes = doc.node_count(),
        edges = doc.edge_count(),
        "wrote gexf export"
    );
    Ok(())
}

/// Render the document as a GEXF 1.2draft string.
pub fn render_gexf(doc: &GexfDocument) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<gexf xmlns=\"http://www.gexf.net/1.2draft\" version=\"1.2\">\n");
    xml.push_str("  <graph mode=\"static\" defaultedgetype=\"directed\">\n");

    if !doc.attributes.is_empty() {
        xml.push_str("    <attributes class=\"node\" mode=\"static\">\n");
        for attr in &doc.attributes {
            let _ = writeln!(
                xml,
                "      <attribute id=\"{}\" title=\"{}\" type=\"{}\"/>",
                escape_xml(&attr.id),
                escape_xml(&attr.title),
                attr.kind.name()
            );
        }
        xml.push_str("    </attributes>\n");
    }

    xml.push_str("    <nodes>\n");
    for node in &doc.nodes {
        if node.values.is_empty() {
            let _ = writeln!(
                xml,
                "      <node id=\"{}\" label=\"{}\"/>",
                escape_xml(&node.id),
                escape_xml(&node.label)
            );
        } else {
            let _ = writeln!(
                xml,
                "      <node id=\"{}\" label=\"{}\">",
                escape_xml(&node.id),
                escape_xml(&node.label)
            );
            xml.push_str("        <attvalues>\n");
            for (attr_id, value) in &node.values {
                let _ = writeln!(
                    xml,
                    "          <attvalue for=\"{}\" value=\"{}\"/>",
                    escape_xml(attr_id),
                    escape_xml(value)
                );
            }
            xml.push_str("        </attvalues>\n");
            xml.push_str("      </node>\n");
        }
    }
    xml.push_str("    </nodes>\n");

    xml.push_str("    <edges>\n");
    for (index, edge) in doc.edges.iter().enumerate() {
        let _ = writeln!(
            xml,
            "      <edge id=\"{}\" source=\"{}\" target=\"{}\" weight=\"{}\"/>",
            index,
            escape_xml(&edge.source),
            escape_xml(&edge.target),
            edge.weight
        );
    }
    xml.push_str("    </edges>\n");

    xml.push_str("  </graph>\n");
    xml.push_str("</gexf>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GexfAttrKind, GexfAttribute, GexfEdge, GexfNode};

    fn sample_doc() -> GexfDocument {
        GexfDocument {
            attributes: vec![GexfAttribute {
                id: "0".to_string(),
                title: "category".to_string(),
                kind: GexfAttrKind::String,
            }],
            nodes: vec![
                GexfNode {
                    id: "n1".to_string(),
                    label: "alpha".to_string(),
                    values: vec![("0".to_string(), "media".to_string())],
                },
                GexfNode {
                    id: "n2".to_string(),
                    label: "beta".to_string(),
                    values: vec![],
                },
            ],
            edges: vec![GexfEdge {
                source: "n1".to_string(),
                target: "n2".to_string(),
                weight: 3.0,
            }],
        }
    }

    #[test]
    fn test_render_contains_declaration_and_graph_mode() {
        let xml = render_gexf(&sample_doc());
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<graph mode=\"static\" defaultedgetype=\"directed\">"));
        assert!(xml.contains("<attribute id=\"0\" title=\"category\" type=\"string\"/>"));
        assert!(xml.contains("<attvalue for=\"0\" value=\"media\"/>"));
        assert!(xml.contains("<edge id=\"0\" source=\"n1\" target=\"n2\" weight=\"3\"/>"));
    }

    #[test]
    fn test_nodes_without_values_self_close() {
        let xml = render_gexf(&sample_doc());
        assert!(xml.contains("<node id=\"n2\" label=\"beta\"/>"));
    }

    #[test]
    fn test_escape_xml_covers_all_specials() {
        assert_eq!(
            escape_xml(r#"a&b<c>d"e'f"#),
            "a&amp;b&lt;c&gt;d&quot;e&apos;f"
        );
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut doc = sample_doc();
        doc.nodes[1].label = "beta <&> \"quoted\"".to_string();
        let xml = render_gexf(&doc);
        assert!(xml.contains("label=\"beta &lt;&amp;&gt; &quot;quoted&quot;\""));
    }
}
