//! Centrality computation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CentralityError {
    /// The power iteration burned its full budget without the score delta
    /// dropping under the tolerance. Callers fall back to zero scores.
    #[error("PageRank did not converge after {iterations} iterations (last delta {delta})")]
    NonConvergence { iterations: usize, delta: f64 },
}
