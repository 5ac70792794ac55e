//! Configuration: one struct per concern, TOML-backed, defaults that
//! work without any config file at all.

pub mod analysis_config;
pub mod defaults;
pub mod export_config;
pub mod spoor_config;
pub mod store_config;

pub use analysis_config::AnalysisConfig;
pub use export_config::ExportConfig;
pub use spoor_config::SpoorConfig;
pub use store_config::StoreConfig;
