//! Settings management for CLI set/unset commands.
//!
//! Each configuration key has a [`SettingHandler`] that validates input and
//! applies it to an in-memory [`Config`]; the caller persists the result.
//!
//! - Simple settings (`endpoint`, `responder`, `log-level`)
//! - Numeric settings (`simulated-delay-ms`)

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
///
/// Each implementation handles a specific configuration key,
/// providing set, unset, and format operations.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the configuration value.
    ///
    /// # Arguments
    /// * `args` - The arguments provided after the key (may be empty)
    /// * `config` - Configuration to update
    ///
    /// # Returns
    /// A success message to display, or an error.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Unset (clear) the configuration value.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Format the current value for display in `insight-scout set` output.
    fn format(&self, config: &Config) -> String;
}

/// Apply `insight-scout set <key> <value...>` and save.
pub fn run_set(key: &str, args: &[String]) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    helpers::mutate_config(|config| handler.set(args, config))
}

/// Apply `insight-scout unset <key>` and save.
pub fn run_unset(key: &str) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    helpers::mutate_config(|config| handler.unset(config))
}

/// Current value of every setting, in display order.
pub fn format_all(config: &Config) -> Vec<String> {
    let registry = SettingRegistry::new();
    registry
        .keys_display_order()
        .iter()
        .filter_map(|key| registry.get(key))
        .map(|handler| handler.format(config))
        .collect()
}
