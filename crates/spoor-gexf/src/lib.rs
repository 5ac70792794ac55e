//! # spoor-gexf
//!
//! GEXF 1.2draft interchange for exported graphs: a small document
//! model, a hand-built writer, and a quick-xml reader. Output targets
//! Gephi and compatible visualization tools; the reader recovers enough
//! structure to verify an export round-trips.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{GexfAttrKind, GexfAttribute, GexfDocument, GexfEdge, GexfNode};
pub use reader::{parse_gexf, read_gexf};
pub use writer::{render_gexf, write_gexf};
