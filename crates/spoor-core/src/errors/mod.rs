//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod centrality_error;
pub mod config_error;
pub mod export_error;
pub mod run_error;
pub mod store_error;

pub use centrality_error::CentralityError;
pub use config_error::ConfigError;
pub use export_error::ExportError;
pub use run_error::RunError;
pub use store_error::StoreError;
