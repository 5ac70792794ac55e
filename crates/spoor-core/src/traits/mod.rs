//! Trait seams between the analysis core and its collaborators.

pub mod store;

pub use store::{MemoryStore, PropagationStore};
