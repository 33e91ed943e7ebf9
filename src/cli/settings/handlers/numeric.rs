//! Numeric setting handlers.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{format_optional, success_set};
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_SIMULATED_DELAY_MS, MIN_SIMULATED_DELAY_MS};

/// Handler for the `simulated-delay-ms` setting.
pub struct SimulatedDelayHandler;

impl SettingHandler for SimulatedDelayHandler {
    fn key(&self) -> &'static str {
        "simulated-delay-ms"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [input] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the simulated reply delay, specify milliseconds:",
                example: "insight-scout set simulated-delay-ms 500",
            });
        };

        let millis: u64 = input
            .trim()
            .parse()
            .map_err(|_| SettingError::InvalidValue {
                key: "simulated-delay-ms",
                input: input.clone(),
                reason: "expected a whole number of milliseconds".to_string(),
            })?;
        if millis < MIN_SIMULATED_DELAY_MS {
            return Err(SettingError::InvalidValue {
                key: "simulated-delay-ms",
                input: input.clone(),
                reason: format!("must be at least {MIN_SIMULATED_DELAY_MS} milliseconds"),
            });
        }

        config.simulated_delay_ms = Some(millis);
        Ok(success_set("simulated-delay-ms", &millis.to_string()))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.simulated_delay_ms = None;
        Ok(format!(
            "✅ Unset simulated-delay-ms (will use default: {DEFAULT_SIMULATED_DELAY_MS})"
        ))
    }

    fn format(&self, config: &Config) -> String {
        let default = DEFAULT_SIMULATED_DELAY_MS.to_string();
        format_optional(
            "simulated-delay-ms",
            config
                .simulated_delay_ms
                .map(|millis| millis.to_string())
                .as_deref(),
            Some(&default),
        )
    }
}
