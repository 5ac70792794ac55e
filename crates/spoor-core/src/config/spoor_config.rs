//! Top-level configuration aggregating every concern.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{AnalysisConfig, ExportConfig, StoreConfig};
use crate::errors::ConfigError;

/// Everything the engine needs to run, loadable from a single TOML file.
/// Every field has a working default, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoorConfig {
    pub analysis: AnalysisConfig,
    pub store: StoreConfig,
    pub export: ExportConfig,
    /// Fallback log level used when `SPOOR_LOG` is unset.
    pub log_level: String,
}

impl Default for SpoorConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            store: StoreConfig::default(),
            export: ExportConfig::default(),
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SpoorConfig {
    /// Parse a TOML document. Does not validate; `load` does both.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read, parse, and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::IoError {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.lookback_days < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.lookback_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.analysis.min_similarity) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.min_similarity".to_string(),
                message: "must be within 0.0..=1.0".to_string(),
            });
        }
        if self.analysis.top_superspreaders < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.top_superspreaders".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.analysis.coordination_window_secs < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.coordination_window_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.analysis.coordination_min_sources < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.coordination_min_sources".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if !defaults::VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "log_level".to_string(),
                message: format!("'{}' is not a known log level", self.log_level),
            });
        }
        Ok(())
    }
}
