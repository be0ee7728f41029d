use std::collections::BTreeMap;

use crate::error::TextporterError;
use crate::model::{StyleDefaults, StyleRecord, DEFAULT_STYLE};

/// Speaker name to style mapping.
///
/// Always holds a `"default"` entry once constructed; lookups for unknown
/// speakers resolve to it. Listing order follows insertion order.
#[derive(Debug, Clone)]
pub struct StyleStore {
    records: BTreeMap<String, StyleRecord>,
    order: Vec<String>,
    fallback: StyleRecord,
}

impl StyleStore {
    /// A store holding only the canonical `"default"` style.
    pub fn new() -> Self {
        Self::with_defaults(&StyleDefaults::default())
    }

    /// A store holding only a `"default"` style built from `defaults`.
    pub fn with_defaults(defaults: &StyleDefaults) -> Self {
        let mut store = Self::without_default(defaults);
        store.ensure_default();
        store
    }

    /// Loaders fill this in and call `ensure_default` once done.
    pub(crate) fn without_default(defaults: &StyleDefaults) -> Self {
        StyleStore {
            records: BTreeMap::new(),
            order: Vec::new(),
            fallback: defaults.record(),
        }
    }

    /// Style for `speaker`, or the `"default"` style if the speaker is unknown.
    pub fn get(&self, speaker: &str) -> &StyleRecord {
        self.records
            .get(speaker.trim())
            .or_else(|| self.records.get(DEFAULT_STYLE))
            .unwrap_or(&self.fallback)
    }

    /// Style for `speaker` without falling back to `"default"`.
    pub fn get_exact(&self, speaker: &str) -> Option<&StyleRecord> {
        self.records.get(speaker.trim())
    }

    pub fn contains(&self, speaker: &str) -> bool {
        self.records.contains_key(speaker.trim())
    }

    /// Insert or replace the style for `speaker`. Replacing `"default"` is allowed.
    pub fn upsert(&mut self, speaker: &str, record: StyleRecord) -> Result<(), TextporterError> {
        let name = speaker.trim();
        if name.is_empty() {
            return Err(TextporterError::InvalidStyle(
                "speaker name must not be empty".into(),
            ));
        }
        record.validate()?;

        if self.records.insert(name.to_string(), record).is_none() {
            self.order.push(name.to_string());
        }
        Ok(())
    }

    /// Remove a speaker's style. Removing an absent speaker is a no-op.
    pub fn remove(&mut self, speaker: &str) -> Result<Option<StyleRecord>, TextporterError> {
        let name = speaker.trim();
        if name == DEFAULT_STYLE {
            return Err(TextporterError::ProtectedStyle(DEFAULT_STYLE.into()));
        }

        let removed = self.records.remove(name);
        if removed.is_some() {
            self.order.retain(|n| n != name);
        }
        Ok(removed)
    }

    /// Insert the built-in `"default"` style if missing. Returns whether it was inserted.
    pub fn ensure_default(&mut self) -> bool {
        if self.records.contains_key(DEFAULT_STYLE) {
            return false;
        }
        self.records
            .insert(DEFAULT_STYLE.to_string(), self.fallback.clone());
        self.order.push(DEFAULT_STYLE.to_string());
        true
    }

    /// Speaker names in insertion order.
    pub fn list_speakers(&self, include_default: bool) -> Vec<&str> {
        self.order
            .iter()
            .map(String::as_str)
            .filter(|name| include_default || *name != DEFAULT_STYLE)
            .collect()
    }

    /// `(speaker, style)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name).map(|r| (name.as_str(), r)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a store obtained through a constructor or loader,
    /// since those always hold `"default"`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a dialogue line, creating the speaker from the current
    /// `"default"` style on first sight.
    pub fn record_dialogue(&mut self, speaker: &str, text: &str) -> Result<(), TextporterError> {
        let name = speaker.trim();
        if !self.records.contains_key(name) {
            let seeded = self.get(DEFAULT_STYLE).style_only();
            self.upsert(name, seeded)?;
        }

        if let Some(record) = self.records.get_mut(name) {
            record.dialogue_lines.push(text.to_string());
        }
        Ok(())
    }
}

// Equal when both list the same speakers with the same styles in the same
// order. The configured fallback is not part of the mapping.
impl PartialEq for StyleStore {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for StyleStore {}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultProfile, Rgb};

    fn red() -> StyleRecord {
        StyleRecord::new("Comic Sans", 18, Rgb(255, 0, 0))
    }

    #[test]
    fn test_new_store_has_only_default() {
        let store = StyleStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_speakers(true), vec!["default"]);
        assert!(store.list_speakers(false).is_empty());
    }

    #[test]
    fn test_get_falls_back_to_default() {
        let store = StyleStore::new();
        let style = store.get("Nobody");
        assert_eq!(style.font, "Arial");
        assert_eq!(style.size, 14);
        assert_eq!(style.color, Rgb::BLACK);
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let mut store = StyleStore::new();
        store.upsert("Tom", red()).unwrap();
        assert_eq!(store.get("Tom").font, "Comic Sans");
        assert_eq!(store.get("TOM").font, "Arial");
    }

    #[test]
    fn test_upsert_trims_name_and_replaces() {
        let mut store = StyleStore::new();
        store.upsert("  Tom ", red()).unwrap();
        store
            .upsert("Tom", StyleRecord::new("Courier", 9, Rgb(1, 2, 3)))
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("Tom").font, "Courier");
        assert_eq!(store.list_speakers(false), vec!["Tom"]);
    }

    #[test]
    fn test_upsert_default_changes_fallback() {
        let mut store = StyleStore::new();
        store.upsert("default", red()).unwrap();
        assert_eq!(store.get("Unknown").font, "Comic Sans");
    }

    #[test]
    fn test_upsert_rejects_empty_name_and_invalid_record() {
        let mut store = StyleStore::new();
        assert!(matches!(
            store.upsert("   ", red()),
            Err(TextporterError::InvalidStyle(_))
        ));
        assert!(matches!(
            store.upsert("Tom", StyleRecord::new("Arial", 0, Rgb::BLACK)),
            Err(TextporterError::InvalidStyle(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_default_is_protected() {
        let mut store = StyleStore::new();
        assert!(matches!(
            store.remove("default"),
            Err(TextporterError::ProtectedStyle(_))
        ));
        assert!(store.contains("default"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = StyleStore::new();
        let before = store.clone();
        assert!(store.remove("Tom").unwrap().is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_present_speaker() {
        let mut store = StyleStore::new();
        store.upsert("Tom", red()).unwrap();
        store.upsert("Ann", red()).unwrap();
        assert!(store.remove("Tom").unwrap().is_some());
        assert_eq!(store.list_speakers(true), vec!["default", "Ann"]);
    }

    #[test]
    fn test_ensure_default_is_idempotent() {
        let mut store = StyleStore::new();
        store.upsert("default", red()).unwrap();
        let before = store.clone();
        assert!(!store.ensure_default());
        assert!(!store.ensure_default());
        assert_eq!(store, before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ensure_default_uses_profile() {
        let defaults = StyleDefaults::for_profile(DefaultProfile::Legacy);
        let mut store = StyleStore::without_default(&defaults);
        assert!(store.ensure_default());
        assert_eq!(store.get("default").size, 10);
        assert_eq!(store.get("default").color, Rgb::GREEN);
    }

    #[test]
    fn test_record_dialogue_seeds_from_default() {
        let mut store = StyleStore::new();
        store.upsert("default", red()).unwrap();
        store.record_dialogue("Tom", "Hi").unwrap();
        store.record_dialogue("Tom", "Again").unwrap();

        let tom = store.get_exact("Tom").unwrap();
        assert_eq!(tom.font, "Comic Sans");
        assert_eq!(tom.size, 18);
        assert_eq!(tom.dialogue_lines, vec!["Hi", "Again"]);
        assert!(store.get("default").dialogue_lines.is_empty());
    }
}
