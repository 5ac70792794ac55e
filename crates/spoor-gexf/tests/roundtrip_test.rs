//! Write-then-read coverage for the GEXF pipeline.

use spoor_gexf::{
    read_gexf, write_gexf, GexfAttrKind, GexfAttribute, GexfDocument, GexfEdge, GexfNode,
};
use tempfile::TempDir;

fn network_doc() -> GexfDocument {
    GexfDocument {
        attributes: vec![
            GexfAttribute {
                id: "0".to_string(),
                title: "category".to_string(),
                kind: GexfAttrKind::String,
            },
            GexfAttribute {
                id: "1".to_string(),
                title: "is_doppelganger".to_string(),
                kind: GexfAttrKind::Boolean,
            },
        ],
        nodes: vec![
            GexfNode {
                id: "n0".to_string(),
                label: "Channel \"A\" <official>".to_string(),
                values: vec![
                    ("0".to_string(), "telegram".to_string()),
                    ("1".to_string(), "true".to_string()),
                ],
            },
            GexfNode {
                id: "n1".to_string(),
                label: "mirror & echo".to_string(),
                values: vec![
                    ("0".to_string(), "domain".to_string()),
                    ("1".to_string(), "false".to_string()),
                ],
            },
            GexfNode {
                id: "n2".to_string(),
                label: "plain".to_string(),
                values: vec![],
            },
        ],
        edges: vec![
            GexfEdge {
                source: "n0".to_string(),
                target: "n1".to_string(),
                weight: 4.0,
            },
            GexfEdge {
                source: "n1".to_string(),
                target: "n2".to_string(),
                weight: 1.0,
            },
        ],
    }
}

#[test]
fn test_written_file_reads_back_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graphs").join("net.gexf");

    let doc = network_doc();
    write_gexf(&doc, &path).unwrap();
    assert!(path.exists());

    let parsed = read_gexf(&path).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_escaped_labels_survive_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("escaped.gexf");

    let doc = network_doc();
    write_gexf(&doc, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // The raw file is escaped; the parsed labels are not.
    assert!(raw.contains("&quot;A&quot; &lt;official&gt;"));
    let parsed = read_gexf(&path).unwrap();
    assert_eq!(parsed.nodes[0].label, "Channel \"A\" <official>");
    assert_eq!(parsed.nodes[1].label, "mirror & echo");
}

#[test]
fn test_parent_directories_created_on_demand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("c.gexf");
    write_gexf(&network_doc(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = read_gexf(&dir.path().join("absent.gexf")).unwrap_err();
    assert!(matches!(
        err,
        spoor_core::errors::ExportError::Read { .. }
    ));
}
