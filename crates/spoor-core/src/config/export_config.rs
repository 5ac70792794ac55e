//! Graph export settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// When false, runs skip the GEXF export entirely.
    pub enabled: bool,
    /// Root directory for exports; graph files land in a `graphs`
    /// subdirectory, created on demand.
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_EXPORT_ENABLED,
            directory: PathBuf::from(defaults::DEFAULT_EXPORT_DIR),
        }
    }
}
