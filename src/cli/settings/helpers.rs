//! Helper functions for settings operations.

use crate::core::config::data::Config;

use super::error::SettingError;

/// Load the config, apply `f`, and save only if `f` succeeds.
pub fn mutate_config<F>(f: F) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<String, SettingError>,
{
    let mut config = Config::load().map_err(|e| SettingError::ConfigError(e.to_string()))?;
    let message = f(&mut config)?;
    config
        .save()
        .map_err(|e| SettingError::ConfigError(e.to_string()))?;
    Ok(message)
}

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

/// Format an optional value for `insight-scout set` output.
pub fn format_optional(key: &str, value: Option<&str>, default: Option<&str>) -> String {
    match (value, default) {
        (Some(value), _) => format!("  {key}: {value}"),
        (None, Some(default)) => format!("  {key}: (unset, default: {default})"),
        (None, None) => format!("  {key}: (unset)"),
    }
}
