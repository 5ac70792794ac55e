//! Parallel execution of independent analysis windows.

use rayon::prelude::*;
use spoor_core::config::{AnalysisConfig, ExportConfig};
use spoor_core::errors::{RunError, StoreError};
use spoor_core::model::NetworkReport;
use spoor_core::traits::PropagationStore;
use tracing::info;

use crate::analyzer::NetworkAnalyzer;

/// Fans analysis windows out across the rayon pool.
///
/// Stores are not shared between threads; the factory opens a fresh one
/// per window, so each analyzer owns its connection for the whole run.
/// Results come back in the order the windows were given, one per
/// window, and a failed window never aborts its siblings.
pub struct BatchRunner<F> {
    store_factory: F,
    export: ExportConfig,
}

impl<S, F> BatchRunner<F>
where
    S: PropagationStore,
    F: Fn() -> Result<S, StoreError> + Sync,
{
    pub fn new(store_factory: F, export: ExportConfig) -> Self {
        Self {
            store_factory,
            export,
        }
    }

    pub fn run(&self, windows: &[AnalysisConfig]) -> Vec<Result<NetworkReport, RunError>> {
        info!(windows = windows.len(), "starting batch analysis");
        windows
            .par_iter()
            .map(|analysis| {
                let store = (self.store_factory)()?;
                let mut analyzer =
                    NetworkAnalyzer::new(store, analysis.clone(), self.export.clone());
                analyzer.run_full_analysis()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoor_core::traits::MemoryStore;

    fn no_export() -> ExportConfig {
        ExportConfig {
            enabled: false,
            ..ExportConfig::default()
        }
    }

    #[test]
    fn test_results_preserve_window_order() {
        let runner = BatchRunner::new(|| Ok(MemoryStore::new()), no_export());
        let windows: Vec<AnalysisConfig> = [7, 30, 90]
            .into_iter()
            .map(|days| AnalysisConfig {
                lookback_days: days,
                ..AnalysisConfig::default()
            })
            .collect();

        let results = runner.run(&windows);

        assert_eq!(results.len(), 3);
        for (days, result) in [7, 30, 90].into_iter().zip(&results) {
            let report = result.as_ref().unwrap();
            assert_eq!(report.period_days, days);
        }
    }

    #[test]
    fn test_factory_failure_surfaces_per_window() {
        let runner = BatchRunner::new(
            || -> Result<MemoryStore, StoreError> {
                Err(StoreError::Open {
                    message: "disk on fire".into(),
                })
            },
            no_export(),
        );

        let results = runner.run(&[AnalysisConfig::default(), AnalysisConfig::default()]);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(result, Err(RunError::Store(_))));
        }
    }

    #[test]
    fn test_empty_window_list_yields_no_results() {
        let runner = BatchRunner::new(|| Ok(MemoryStore::new()), no_export());
        assert!(runner.run(&[]).is_empty());
    }
}
