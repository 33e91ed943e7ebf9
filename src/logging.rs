//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; the conversation itself is
//! recorded separately by [`crate::utils::logging::TranscriptLog`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter directive: `RUST_LOG` first, then the configured level.
fn filter_for(config_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config_level
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_tracing(config_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
