//! Source selection that precedes the dashboard.
//!
//! Onboarding starts with nothing selected and the selection prompt as the
//! only transcript entry. The user picks sources, may chat through the shared
//! session meanwhile, and finally commits, which replaces the session's source
//! list with the seed list restricted to the selection. A transcript that
//! never grew past the prompt is swapped back for the usual greeting.

use std::collections::BTreeSet;

use crate::core::constants::{GREETING, ONBOARDING_PROMPT};
use crate::core::data_source::{seed_sources, seed_with_selection, DataSource, UnknownSource};
use crate::core::message::Message;
use crate::core::session::ChatSession;

#[derive(Debug, Clone)]
pub struct Onboarding {
    available: Vec<DataSource>,
    selected: BTreeSet<String>,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self {
            available: seed_sources(),
            selected: BTreeSet::new(),
        }
    }

    pub fn prompt(&self) -> &'static str {
        ONBOARDING_PROMPT
    }

    pub fn available(&self) -> &[DataSource] {
        &self.available
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Add or remove `id` from the selection; returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> Result<bool, UnknownSource> {
        if !self.available.iter().any(|source| source.id == id) {
            return Err(UnknownSource { id: id.to_string() });
        }
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.to_string());
            Ok(true)
        }
    }

    /// Confirmation shown after sources are picked.
    pub fn acknowledgement(&self) -> String {
        let count = self.selected.len();
        let plural = if count == 1 { "" } else { "s" };
        format!(
            "Great! I've connected to {count} data source{plural}. I'm ready to analyze your data and show you insights. Type /start to view your dashboard!"
        )
    }

    /// Start the session transcript with the selection prompt.
    pub fn open(&self, session: &ChatSession) {
        session.restart_with(Message::assistant(self.prompt()));
    }

    /// Hand the selection to the shared session.
    pub fn commit(self, session: &ChatSession) {
        session.replace_sources(seed_with_selection(&self.selected));
        if session.message_count() <= 1 {
            session.restart_with(Message::assistant(GREETING));
        }
    }
}
