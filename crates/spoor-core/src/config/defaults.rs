//! Default configuration values.

/// Trailing analysis window in days.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Minimum similarity for a scored link to enter the content graph.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.5;

/// Ranked superspreaders kept per run.
pub const DEFAULT_TOP_SUPERSPREADERS: usize = 20;

/// Coordination window width in seconds.
pub const DEFAULT_COORDINATION_WINDOW_SECS: i64 = 300;

/// Minimum distinct sources for a coordinated burst.
pub const DEFAULT_COORDINATION_MIN_SOURCES: usize = 3;

/// Database file path.
pub const DEFAULT_DB_PATH: &str = "spoor.db";

/// Whether runs export the source graph.
pub const DEFAULT_EXPORT_ENABLED: bool = true;

/// Directory exports land under.
pub const DEFAULT_EXPORT_DIR: &str = "./exports";

/// Log level when no filter is set in the environment.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
