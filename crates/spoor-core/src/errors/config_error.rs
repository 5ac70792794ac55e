//! Configuration loading and validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error reading config {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },
}
