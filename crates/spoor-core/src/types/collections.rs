//! Collection type re-exports used throughout the workspace.
//!
//! Hash maps keyed by ids are hot in graph construction, so everything
//! goes through `FxHashMap`. `BTreeMap` is re-exported for the few places
//! that need deterministic key order in serialized output.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// Inline vector sized for burst samples (at most ten ids per event).
pub type SmallVec10<T> = SmallVec<[T; 10]>;
