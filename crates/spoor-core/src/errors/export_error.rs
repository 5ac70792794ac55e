//! Graph export and import errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write export {path}: {message}")]
    Write { path: String, message: String },

    #[error("Failed to read export {path}: {message}")]
    Read { path: String, message: String },

    #[error("Malformed GEXF document: {message}")]
    Malformed { message: String },
}
