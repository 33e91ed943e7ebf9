use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{DEFAULT_SIMULATED_DELAY_MS, MIN_SIMULATED_DELAY_MS};
use crate::core::responder::{ResponderKind, ResponderSettings};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Webhook that receives prompts (e.g., "https://hooks.example.com/insights")
    pub endpoint: Option<String>,
    /// Reply strategy: "webhook" or "simulated"
    pub responder: Option<ResponderKind>,
    /// Pause before a simulated reply, in milliseconds
    pub simulated_delay_ms: Option<u64>,
    /// Default tracing filter when RUST_LOG is not set (e.g., "info", "insight_scout=debug")
    pub log_level: Option<String>,
}

/// Values that take precedence over the config file, highest first.
#[derive(Debug, Default, Clone)]
pub struct ResponderOverrides {
    pub cli_kind: Option<ResponderKind>,
    pub cli_endpoint: Option<String>,
    pub env_endpoint: Option<String>,
}

impl Config {
    /// Pick the responder and its endpoint.
    ///
    /// The endpoint comes from the CLI, then the environment, then the file.
    /// An explicit kind wins; otherwise a known endpoint selects the webhook
    /// and its absence selects the simulator. A simulated delay below
    /// [`MIN_SIMULATED_DELAY_MS`] is raised to it.
    pub fn resolve_responder(&self, overrides: ResponderOverrides) -> ResponderSettings {
        let endpoint = overrides
            .cli_endpoint
            .or(overrides.env_endpoint)
            .or_else(|| self.endpoint.clone())
            .map(|endpoint| endpoint.trim().to_string())
            .filter(|endpoint| !endpoint.is_empty());

        let kind = overrides
            .cli_kind
            .or(self.responder)
            .unwrap_or(if endpoint.is_some() {
                ResponderKind::Webhook
            } else {
                ResponderKind::Simulated
            });

        ResponderSettings {
            kind,
            endpoint,
            simulated_delay: Duration::from_millis(
                self.simulated_delay_ms
                    .unwrap_or(DEFAULT_SIMULATED_DELAY_MS)
                    .max(MIN_SIMULATED_DELAY_MS),
            ),
        }
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
