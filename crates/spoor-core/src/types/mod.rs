//! Shared type utilities.

pub mod collections;
