//! Logging initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Reads per-module levels from the `SPOOR_LOG` environment variable,
/// e.g. `SPOOR_LOG=spoor_analysis=debug,spoor_storage=warn`, falling back
/// to the given level for the workspace crates when unset or invalid.
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging(fallback_level: &str) {
    let fallback = ["spoor_core", "spoor_storage", "spoor_analysis", "spoor_gexf"]
        .map(|krate| format!("{krate}={fallback_level}"))
        .join(",");
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("SPOOR_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
