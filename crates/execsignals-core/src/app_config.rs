//! Resolved application configuration.

use std::path::PathBuf;

/// Configuration resolved from environment variables at startup.
///
/// CLI flags override these values; the env layer only supplies defaults
/// so cron wrappers don't have to repeat paths on every invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the jobs SQLite database.
    pub db_path: PathBuf,
    /// Directory where report artifacts are written.
    pub output_dir: PathBuf,
    /// Default log level for the tracing subscriber.
    pub log_level: String,
    /// Default lookback window in days for lead selection.
    pub lookback_days: u32,
}
