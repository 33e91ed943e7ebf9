//! Toggleable data sources the assistant is told to draw on.
//!
//! The registry is an ordered list seeded at startup. Entries are never added
//! or removed individually; they are toggled by id or replaced wholesale when
//! onboarding commits a selection.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

impl DataSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, enabled: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled,
        }
    }
}

const SEED_SOURCES: &[(&str, &str, bool)] = &[
    ("adobe", "Adobe Analytics", true),
    ("wedo", "We do", true),
    ("web", "Web (comp analysis)", false),
    ("research", "Research packs", true),
    ("csat", "CSAT", true),
    ("esat", "ESAT", false),
    ("reviews", "Customer reviews", true),
];

/// The built-in source list with its default enabled flags.
pub fn seed_sources() -> Vec<DataSource> {
    SEED_SOURCES
        .iter()
        .map(|(id, name, enabled)| DataSource::new(*id, *name, *enabled))
        .collect()
}

/// The built-in source list with exactly the given ids enabled.
///
/// Ids that are not part of the seed list are ignored.
pub fn seed_with_selection<I, S>(selected: I) -> Vec<DataSource>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: HashSet<String> = selected
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    seed_sources()
        .into_iter()
        .map(|source| DataSource {
            enabled: selected.contains(&source.id),
            ..source
        })
        .collect()
}

/// Returned when a toggle names an id the registry does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSource {
    pub id: String,
}

impl fmt::Display for UnknownSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown data source: {}", self.id)
    }
}

impl std::error::Error for UnknownSource {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSourceRegistry {
    sources: Vec<DataSource>,
}

impl DataSourceRegistry {
    pub fn seeded() -> Self {
        Self::from_sources(seed_sources())
    }

    /// Build a registry from an arbitrary list. Later duplicates of an id are dropped.
    pub fn from_sources(sources: Vec<DataSource>) -> Self {
        Self {
            sources: dedup_by_id(sources),
        }
    }

    /// Flip the `enabled` flag of `id` and return its new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, UnknownSource> {
        let source = self
            .sources
            .iter_mut()
            .find(|source| source.id == id)
            .ok_or_else(|| UnknownSource { id: id.to_string() })?;
        source.enabled = !source.enabled;
        Ok(source.enabled)
    }

    /// Discard the current list and adopt `sources` as-is.
    pub fn replace_all(&mut self, sources: Vec<DataSource>) {
        self.sources = dedup_by_id(sources);
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.iter().find(|source| source.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter().filter(|source| source.enabled)
    }

    pub fn enabled_names(&self) -> Vec<String> {
        self.enabled().map(|source| source.name.clone()).collect()
    }

    pub fn as_slice(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn dedup_by_id(sources: Vec<DataSource>) -> Vec<DataSource> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|source| {
            let fresh = seen.insert(source.id.clone());
            if !fresh {
                debug!(id = %source.id, "dropping duplicate data source");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(registry: &DataSourceRegistry) -> Vec<(String, bool)> {
        registry
            .iter()
            .map(|source| (source.id.clone(), source.enabled))
            .collect()
    }

    #[test]
    fn seed_order_and_defaults() {
        let registry = DataSourceRegistry::seeded();
        let ids: Vec<_> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["adobe", "wedo", "web", "research", "csat", "esat", "reviews"]
        );
        assert_eq!(registry.enabled().count(), 5);
        assert_eq!(
            registry.enabled_names(),
            [
                "Adobe Analytics",
                "We do",
                "Research packs",
                "CSAT",
                "Customer reviews"
            ]
        );
    }

    #[test]
    fn double_toggle_restores_every_flag() {
        let original = DataSourceRegistry::seeded();
        for source in original.iter() {
            let mut registry = original.clone();
            let flipped = registry.toggle(&source.id).expect("seeded id");
            assert_eq!(flipped, !source.enabled);
            registry.toggle(&source.id).expect("seeded id");
            assert_eq!(flags(&registry), flags(&original), "id={}", source.id);
        }
    }

    #[test]
    fn toggle_touches_only_the_target() {
        let mut registry = DataSourceRegistry::seeded();
        registry.toggle("web").unwrap();

        for (source, seed) in registry.iter().zip(seed_sources()) {
            assert_eq!(source.id, seed.id);
            if source.id == "web" {
                assert!(source.enabled);
            } else {
                assert_eq!(source.enabled, seed.enabled);
            }
        }
    }

    #[test]
    fn unknown_toggle_is_reported_and_harmless() {
        let mut registry = DataSourceRegistry::seeded();
        let before = registry.clone();
        let err = registry.toggle("nope").unwrap_err();
        assert_eq!(err.id, "nope");
        assert_eq!(err.to_string(), "Unknown data source: nope");
        assert_eq!(registry, before);
    }

    #[test]
    fn replace_all_discards_previous_entries() {
        let mut registry = DataSourceRegistry::seeded();
        registry.replace_all(vec![
            DataSource::new("b", "Beta", false),
            DataSource::new("a", "Alpha", true),
        ]);
        assert_eq!(
            flags(&registry),
            [("b".to_string(), false), ("a".to_string(), true)]
        );
        assert!(!registry.contains("adobe"));
    }

    #[test]
    fn duplicate_ids_keep_the_first_entry() {
        let registry = DataSourceRegistry::from_sources(vec![
            DataSource::new("a", "First", true),
            DataSource::new("a", "Second", false),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().name, "First");
    }

    #[test]
    fn selection_enables_only_listed_ids_in_seed_order() {
        let sources = seed_with_selection(["reviews", "web", "missing"]);
        let enabled: Vec<_> = sources
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(enabled, ["web", "reviews"]);
        assert_eq!(sources.len(), SEED_SOURCES.len());
    }
}
