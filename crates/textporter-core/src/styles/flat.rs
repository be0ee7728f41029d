//! Flat style file: one `[speaker]` section per style with `font`, `size`
//! and `color` keys. Dialogue lines are not stored.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use super::{read_style_file, write_replacing, StyleStore};
use crate::error::TextporterError;
use crate::model::{Rgb, StyleDefaults, StyleRecord};

#[derive(Debug)]
struct Section {
    name: String,
    font: Option<String>,
    size: Option<u32>,
    color: Option<Rgb>,
}

impl Section {
    fn new(name: String) -> Self {
        Section {
            name,
            font: None,
            size: None,
            color: None,
        }
    }

    /// Missing fields fall back to the default font and size, and black.
    fn into_record(self, defaults: &StyleDefaults) -> (String, StyleRecord) {
        let record = StyleRecord::new(
            self.font.unwrap_or_else(|| defaults.font.clone()),
            self.size.unwrap_or(defaults.size),
            self.color.unwrap_or(Rgb::BLACK),
        );
        (self.name, record)
    }
}

/// Parse flat style file content into a fresh store.
pub fn parse_flat(content: &str, defaults: &StyleDefaults) -> Result<StyleStore, TextporterError> {
    let sections = parse_sections(content)?;

    let mut store = StyleStore::without_default(defaults);
    for section in sections {
        let (name, record) = section.into_record(defaults);
        store
            .upsert(&name, record)
            .map_err(|e| TextporterError::ParseError(format!("section [{name}]: {e}")))?;
    }

    if store.ensure_default() {
        tracing::debug!("style file had no [default] section, synthesized one");
    }
    Ok(store)
}

fn parse_sections(content: &str) -> Result<Vec<Section>, TextporterError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = inner.trim();
            if name.is_empty() {
                return Err(TextporterError::ParseError(format!(
                    "line {line_no}: empty section name"
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(TextporterError::ParseError(format!(
                    "line {line_no}: duplicate section [{name}]"
                )));
            }
            sections.push(Section::new(name.to_string()));
            continue;
        }

        let Some(section) = sections.last_mut() else {
            return Err(TextporterError::ParseError(format!(
                "line {line_no}: key outside of any section"
            )));
        };

        let Some(split) = line.find(|c| c == '=' || c == ':') else {
            return Err(TextporterError::ParseError(format!(
                "line {line_no}: expected 'key = value', got '{line}'"
            )));
        };
        let key = line[..split].trim().to_lowercase();
        let value = line[split + 1..].trim();

        match key.as_str() {
            "font" => section.font = Some(value.to_string()),
            "size" => {
                let size = value.parse::<u32>().map_err(|_| {
                    TextporterError::ParseError(format!(
                        "line {line_no}: size '{value}' is not a positive integer"
                    ))
                })?;
                section.size = Some(size);
            }
            "color" => {
                let color = Rgb::from_str_loose(value).map_err(|e| {
                    TextporterError::ParseError(format!("line {line_no}: {e}"))
                })?;
                section.color = Some(color);
            }
            other => {
                tracing::debug!(section = %section.name, key = other, "ignoring unknown style key");
            }
        }
    }

    Ok(sections)
}

/// Render a store in the flat format.
pub fn to_flat_string(store: &StyleStore) -> String {
    let mut out = String::new();
    for (i, (speaker, record)) in store.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "[{speaker}]");
        let _ = writeln!(out, "font = {}", record.font);
        let _ = writeln!(out, "size = {}", record.size);
        let _ = writeln!(out, "color = {}", record.color);
    }
    out
}

/// Load a flat style file into a fresh store.
pub fn load_flat(path: &Path, defaults: &StyleDefaults) -> Result<StyleStore, TextporterError> {
    let content = read_style_file(path)?;
    let store = parse_flat(&content, defaults).map_err(|e| match e {
        TextporterError::ParseError(reason) => {
            TextporterError::ParseError(format!("{}: {reason}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(path = %path.display(), speakers = store.len(), "loaded flat style file");
    Ok(store)
}

/// Save a store as a flat style file. Dialogue lines are dropped.
pub fn save_flat(store: &StyleStore, path: &Path) -> Result<(), TextporterError> {
    write_replacing(path, to_flat_string(store).as_bytes())
}
