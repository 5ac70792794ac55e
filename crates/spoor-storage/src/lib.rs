//! # spoor-storage
//!
//! SQLite persistence for the Spoor engine: connection setup,
//! `user_version` migrations, per-table query modules, and the
//! `SqliteStore` implementation of the store read contract.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use store::SqliteStore;
