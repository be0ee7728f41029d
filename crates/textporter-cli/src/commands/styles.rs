use std::path::Path;

use textporter_core::config::EngineConfig;
use textporter_core::error::TextporterError;
use textporter_core::model::{Rgb, DEFAULT_STYLE};
use textporter_core::styles::{self, StyleStore};

use crate::commands::load_store;
use crate::output;

pub fn list(config: &EngineConfig, file: &Path, include_default: bool) -> Result<(), TextporterError> {
    let store = load_store(config, Some(file))?;
    output::table::print_styles(&store, include_default);
    Ok(())
}

pub fn show(config: &EngineConfig, file: &Path, speaker: &str) -> Result<(), TextporterError> {
    let store = load_store(config, Some(file))?;
    if !store.contains(speaker) {
        println!("'{}' has no style of its own, showing '{}'", speaker.trim(), DEFAULT_STYLE);
    }
    output::table::print_style(speaker.trim(), store.get(speaker));
    Ok(())
}

pub fn set(
    config: &EngineConfig,
    file: &Path,
    speaker: &str,
    font: Option<String>,
    size: Option<u32>,
    color: Option<String>,
) -> Result<(), TextporterError> {
    // A missing file is created with just the default style and this speaker.
    let mut store = if file.exists() {
        load_store(config, Some(file))?
    } else {
        StyleStore::with_defaults(&config.style_defaults())
    };

    let mut record = match store.get_exact(speaker) {
        Some(existing) => existing.clone(),
        None => store.get(DEFAULT_STYLE).style_only(),
    };
    if let Some(font) = font {
        record.font = font;
    }
    if let Some(size) = size {
        record.size = size;
    }
    if let Some(color) = color {
        record.color = Rgb::from_str_loose(&color)?;
    }

    store.upsert(speaker, record)?;
    styles::save_styles(&store, file)?;
    output::table::print_style(speaker.trim(), store.get(speaker));
    Ok(())
}

pub fn remove(config: &EngineConfig, file: &Path, speaker: &str) -> Result<(), TextporterError> {
    let mut store = load_store(config, Some(file))?;
    match store.remove(speaker)? {
        Some(_) => {
            styles::save_styles(&store, file)?;
            println!("Removed '{}' from {}", speaker.trim(), file.display());
        }
        None => println!("'{}' not found in {}, nothing to do", speaker.trim(), file.display()),
    }
    Ok(())
}

pub fn convert(config: &EngineConfig, input: &Path, output: &Path) -> Result<(), TextporterError> {
    let store = load_store(config, Some(input))?;
    styles::save_styles(&store, output)?;

    let dropped: usize = store.iter().map(|(_, r)| r.dialogue_lines.len()).sum();
    println!(
        "Converted {} style(s) from {} to {}",
        store.len(),
        input.display(),
        output.display()
    );
    if dropped > 0 && styles::StyleFormat::from_path(output) == styles::StyleFormat::Flat {
        eprintln!("  warning: {dropped} dialogue line(s) not kept by the flat format");
    }
    Ok(())
}
