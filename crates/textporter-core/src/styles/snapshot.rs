//! Structured snapshot format: one JSON object keyed by speaker name,
//! each value `{font, size, color: [R,G,B], dialogues: [...]}`.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{read_style_file, write_replacing, StyleStore};
use crate::error::TextporterError;
use crate::model::{StyleDefaults, StyleRecord};

impl Serialize for StyleStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (speaker, record) in self.iter() {
            map.serialize_entry(speaker, record)?;
        }
        map.end()
    }
}

/// Snapshot entries in document order.
struct SnapshotEntries(Vec<(String, StyleRecord)>);

impl<'de> Deserialize<'de> for SnapshotEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = SnapshotEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping speaker names to styles")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((speaker, record)) = access.next_entry::<String, StyleRecord>()? {
            entries.push((speaker, record));
        }
        Ok(SnapshotEntries(entries))
    }
}

/// Serialize a store to pretty-printed snapshot JSON.
pub fn to_snapshot_string(store: &StyleStore) -> Result<String, TextporterError> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// Parse snapshot JSON into a fresh store.
pub fn parse_snapshot(json: &str, defaults: &StyleDefaults) -> Result<StyleStore, TextporterError> {
    let SnapshotEntries(entries) = serde_json::from_str::<SnapshotEntries>(json)
        .map_err(|e| TextporterError::ParseError(format!("invalid snapshot: {e}")))?;

    let mut store = StyleStore::without_default(defaults);
    let mut seen = HashSet::new();
    for (speaker, record) in entries {
        let name = speaker.trim().to_string();
        if name.is_empty() {
            return Err(TextporterError::ParseError(
                "snapshot contains an empty speaker name".into(),
            ));
        }
        if !seen.insert(name.clone()) {
            return Err(TextporterError::ParseError(format!(
                "snapshot contains speaker '{name}' more than once"
            )));
        }
        store
            .upsert(&name, record)
            .map_err(|e| TextporterError::ParseError(format!("speaker '{name}': {e}")))?;
    }

    if store.ensure_default() {
        tracing::debug!("snapshot had no default style, synthesized one");
    }
    Ok(store)
}

/// Load a snapshot file into a fresh store.
pub fn load_snapshot(path: &Path, defaults: &StyleDefaults) -> Result<StyleStore, TextporterError> {
    let content = read_style_file(path)?;
    let store = parse_snapshot(&content, defaults).map_err(|e| match e {
        TextporterError::ParseError(reason) => {
            TextporterError::ParseError(format!("{}: {reason}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(path = %path.display(), speakers = store.len(), "loaded snapshot");
    Ok(store)
}

/// Save a store, including dialogue lines, as a snapshot file.
pub fn save_snapshot(store: &StyleStore, path: &Path) -> Result<(), TextporterError> {
    let json = to_snapshot_string(store)?;
    write_replacing(path, json.as_bytes())
}
