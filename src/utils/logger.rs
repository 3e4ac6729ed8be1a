//! Logging utilities
//!
//! Provides logging configuration for the harness.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the default log filter.
pub const LOG_ENV: &str = "SHTEST_LOG";

/// Initialize the global logger.
///
/// Diagnostics share stderr with the live status output, so the default
/// level stays at warnings; verbose runs raise it to info. `SHTEST_LOG`
/// overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("shtest={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
