pub mod flat;
pub mod snapshot;
pub mod store;

use std::io::Write;
use std::path::Path;

use crate::error::TextporterError;
use crate::model::StyleDefaults;
pub use store::StyleStore;

/// On-disk style formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFormat {
    /// Section-based key/value file without dialogue lines.
    Flat,
    /// JSON document including dialogue lines.
    Snapshot,
}

impl StyleFormat {
    /// `.json` files are snapshots, everything else is read as a flat style file.
    pub fn from_path(path: &Path) -> StyleFormat {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            StyleFormat::Snapshot
        } else {
            StyleFormat::Flat
        }
    }
}

/// Load a style store, picking the format from the file extension.
pub fn load_styles(path: &Path, defaults: &StyleDefaults) -> Result<StyleStore, TextporterError> {
    match StyleFormat::from_path(path) {
        StyleFormat::Flat => flat::load_flat(path, defaults),
        StyleFormat::Snapshot => snapshot::load_snapshot(path, defaults),
    }
}

/// Save a style store, picking the format from the file extension.
pub fn save_styles(store: &StyleStore, path: &Path) -> Result<(), TextporterError> {
    match StyleFormat::from_path(path) {
        StyleFormat::Flat => flat::save_flat(store, path),
        StyleFormat::Snapshot => snapshot::save_snapshot(store, path),
    }
}

/// Read a style file, attaching the path to any IO failure.
fn read_style_file(path: &Path) -> Result<String, TextporterError> {
    std::fs::read_to_string(path).map_err(|e| TextporterError::StyleFileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write `contents` to a temp file next to `path`, then move it over `path`.
///
/// The destination is left untouched if any step fails.
fn write_replacing(path: &Path, contents: &[u8]) -> Result<(), TextporterError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmpfile = tempfile::NamedTempFile::new_in(dir)?;
    tmpfile.write_all(contents)?;
    tmpfile.flush()?;
    tmpfile.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote style file");
    Ok(())
}
