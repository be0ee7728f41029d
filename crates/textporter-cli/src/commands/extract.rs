use std::path::PathBuf;

use textporter_core::config::EngineConfig;
use textporter_core::error::TextporterError;
use textporter_core::extraction::pdftotext::PdftotextExtractor;
use textporter_core::pages::PageSelection;
use textporter_core::styles;

use crate::commands::load_store;
use crate::output;

pub fn run(
    config: &EngineConfig,
    pdf_file: PathBuf,
    pages: String,
    styles_file: Option<PathBuf>,
    out: Option<PathBuf>,
    output_format: &str,
) -> Result<(), TextporterError> {
    let selection = PageSelection::Text(pages);
    // Fail on a bad range before touching any file.
    selection.resolve()?;

    let mut store = load_store(config, styles_file.as_deref())?;
    let extractor = PdftotextExtractor::new();
    let report = textporter_core::extract_pdf(&pdf_file, &extractor, &selection, &mut store)?;

    match output_format {
        "json" => output::json::print(&store)?,
        _ => output::table::print_extraction(&report, &store),
    }

    if let Some(path) = out {
        styles::save_styles(&store, &path)?;
        eprintln!(
            "Saved {} speaker(s) to {}",
            store.list_speakers(false).len(),
            path.display()
        );
    }

    Ok(())
}
