//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{EndpointHandler, LogLevelHandler, ResponderHandler, SimulatedDelayHandler};
use super::SettingHandler;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in display order for `insight-scout set` output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        // Register handlers in display order
        registry.register(Box::new(EndpointHandler));
        registry.register(Box::new(ResponderHandler));
        registry.register(Box::new(SimulatedDelayHandler));
        registry.register(Box::new(LogLevelHandler));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    /// Get a handler by key.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Get all keys in sorted order.
    pub fn keys_sorted(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.handlers.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Get all keys in display order.
    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
