//! GEXF reader over quick-xml events.
//!
//! Tolerant of extra markup: unknown elements are skipped, unknown
//! attribute types read back as strings. Structural problems (missing
//! edge endpoints, unparseable weights, broken XML) are errors.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use spoor_core::errors::ExportError;

use crate::document::{GexfAttrKind, GexfAttribute, GexfDocument, GexfEdge, GexfNode};

/// Read and parse a GEXF file.
pub fn read_gexf(path: &Path) -> Result<GexfDocument, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ExportError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_gexf(&text)
}

/// Parse GEXF text into a document.
pub fn parse_gexf(text: &str) -> Result<GexfDocument, ExportError> {
    let mut reader = Reader::from_str(text);

    let mut doc = GexfDocument::default();
    let mut open_node: Option<GexfNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"node" => open_node = Some(parse_node(&e)?),
                b"attribute" => doc.attributes.push(parse_attribute(&e)?),
                b"attvalue" => push_attvalue(&e, open_node.as_mut())?,
                b"edge" => doc.edges.push(parse_edge(&e)?),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"node" => doc.nodes.push(parse_node(&e)?),
                b"attribute" => doc.attributes.push(parse_attribute(&e)?),
                b"attvalue" => push_attvalue(&e, open_node.as_mut())?,
                b"edge" => doc.edges.push(parse_edge(&e)?),
                _ => {}
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"node" {
                    if let Some(node) = open_node.take() {
                        doc.nodes.push(node);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(e)),
        }
    }

    Ok(doc)
}

fn parse_node(e: &BytesStart<'_>) -> Result<GexfNode, ExportError> {
    Ok(GexfNode {
        id: require_attr(e, b"id", "node")?,
        label: get_attr(e, b"label")?.unwrap_or_default(),
        values: Vec::new(),
    })
}

fn parse_attribute(e: &BytesStart<'_>) -> Result<GexfAttribute, ExportError> {
    let kind = get_attr(e, b"type")?
        .map(|t| GexfAttrKind::parse(&t))
        .unwrap_or(GexfAttrKind::String);
    Ok(GexfAttribute {
        id: require_attr(e, b"id", "attribute")?,
        title: get_attr(e, b"title")?.unwrap_or_default(),
        kind,
    })
}

fn push_attvalue(
    e: &BytesStart<'_>,
    open_node: Option<&mut GexfNode>,
) -> Result<(), ExportError> {
    // attvalues outside a node element carry no meaning; drop them.
    if let Some(node) = open_node {
        let attr_id = require_attr(e, b"for", "attvalue")?;
        let value = get_attr(e, b"value")?.unwrap_or_default();
        node.values.push((attr_id, value));
    }
    Ok(())
}

fn parse_edge(e: &BytesStart<'_>) -> Result<GexfEdge, ExportError> {
    let weight = match get_attr(e, b"weight")? {
        Some(raw) => raw.parse::<f64>().map_err(|_| ExportError::Malformed {
            message: format!("edge weight '{raw}' is not a number"),
        })?,
        None => 1.0,
    };
    Ok(GexfEdge {
        source: require_attr(e, b"source", "edge")?,
        target: require_attr(e, b"target", "edge")?,
        weight,
    })
}

fn get_attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, ExportError> {
    for attr in e.attributes() {
        let attr = attr.map_err(malformed)?;
        if attr.key.local_name().as_ref() == name {
            let value = attr.unescape_value().map_err(malformed)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn require_attr(e: &BytesStart<'_>, name: &[u8], element: &str) -> Result<String, ExportError> {
    get_attr(e, name)?.ok_or_else(|| ExportError::Malformed {
        message: format!(
            "{element} element is missing its '{}' attribute",
            String::from_utf8_lossy(name)
        ),
    })
}

fn malformed(e: impl std::fmt::Display) -> ExportError {
    ExportError::Malformed {
        message: e.to_string(),
    }
}
