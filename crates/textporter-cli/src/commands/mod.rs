pub mod extract;
pub mod pages;
pub mod render;
pub mod styles;

use std::path::Path;

use textporter_core::config::{self, EngineConfig};
use textporter_core::error::TextporterError;
use textporter_core::styles::{self as style_files, StyleStore};

pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig, TextporterError> {
    match path {
        Some(path) => config::load_config(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Load a style file, or start from a store holding only the default style.
pub fn load_store(
    config: &EngineConfig,
    styles: Option<&Path>,
) -> Result<StyleStore, TextporterError> {
    let defaults = config.style_defaults();
    match styles {
        Some(path) => style_files::load_styles(path, &defaults),
        None => Ok(StyleStore::with_defaults(&defaults)),
    }
}
