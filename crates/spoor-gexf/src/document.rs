//! GEXF document model.
//!
//! Only the subset the engine emits: a static directed graph with
//! declared node attributes and weighted edges.

/// Declared type of a node attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GexfAttrKind {
    String,
    Boolean,
    Integer,
    Double,
}

impl GexfAttrKind {
    /// Type name as written in the `attribute` declaration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Double => "double",
        }
    }

    /// Parse a declared type name; unknown names read back as strings.
    pub fn parse(s: &str) -> Self {
        match s {
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "double" => Self::Double,
            _ => Self::String,
        }
    }
}

/// A declared node attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct GexfAttribute {
    pub id: String,
    pub title: String,
    pub kind: GexfAttrKind,
}

/// A node with its attribute values keyed by attribute id.
#[derive(Debug, Clone, PartialEq)]
pub struct GexfNode {
    pub id: String,
    pub label: String,
    pub values: Vec<(String, String)>,
}

/// A directed weighted edge between node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct GexfEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// A static directed graph ready for serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GexfDocument {
    pub attributes: Vec<GexfAttribute>,
    pub nodes: Vec<GexfNode>,
    pub edges: Vec<GexfEdge>,
}

impl GexfDocument {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
