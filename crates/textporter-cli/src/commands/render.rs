use std::path::PathBuf;

use textporter_core::config::EngineConfig;
use textporter_core::error::TextporterError;
use textporter_core::extraction::pdftotext::PdftotextExtractor;
use textporter_core::pages::PageSelection;
use textporter_core::render::svg::SvgSink;

use crate::commands::load_store;

pub fn run(
    config: &EngineConfig,
    pdf_file: PathBuf,
    pages: String,
    styles_file: Option<PathBuf>,
    out_dir: PathBuf,
) -> Result<(), TextporterError> {
    let selection = PageSelection::Text(pages);
    selection.resolve()?;

    let mut store = load_store(config, styles_file.as_deref())?;
    let extractor = PdftotextExtractor::new();
    let mut sink = SvgSink::new();
    let summary = textporter_core::render_pdf(
        &pdf_file,
        &extractor,
        &selection,
        &mut store,
        &config.layout,
        &mut sink,
    )?;

    std::fs::create_dir_all(&out_dir)?;
    for layer in &sink.layers {
        let file_name = format!("{}.svg", layer.name.to_lowercase().replace(' ', "-"));
        let path = out_dir.join(file_name);
        std::fs::write(&path, &layer.svg)?;
        println!("{}  {}", layer.name, path.display());
    }

    eprintln!(
        "Placed {} line(s) on {} layer(s)",
        summary.placements, summary.layers
    );
    if !summary.extraction.failed_pages.is_empty() {
        let failed: Vec<String> = summary
            .extraction
            .failed_pages
            .iter()
            .map(|p| p.to_string())
            .collect();
        eprintln!("  warning: no text for page(s) {}", failed.join(", "));
    }

    Ok(())
}
