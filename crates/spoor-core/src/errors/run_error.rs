//! Aggregate error for a full analysis run.
//!
//! Only store and export failures abort a run; metric fallbacks are
//! handled inside the stages and never surface here.

use thiserror::Error;

use crate::errors::{ExportError, StoreError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
