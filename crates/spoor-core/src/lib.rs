//! # spoor-core
//!
//! Foundation crate for the Spoor propagation analysis engine.
//! Defines the domain model, per-subsystem errors, configuration,
//! algorithm constants, the store read contract, and logging setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod model;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SpoorConfig;
pub use errors::{RunError, StoreError};
pub use model::{ContentItem, NetworkReport, PropagationKind, PropagationLink, Source, SourceKind};
pub use traits::{MemoryStore, PropagationStore};
