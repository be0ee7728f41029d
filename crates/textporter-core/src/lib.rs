pub mod config;
pub mod dialogue;
pub mod error;
pub mod extraction;
pub mod model;
pub mod pages;
pub mod render;
pub mod styles;

use std::path::Path;

use dialogue::ExtractionReport;
use error::TextporterError;
use extraction::{PageContent, PdfExtractor};
use pages::PageSelection;
use render::{LayoutConfig, RenderSink};
use styles::StyleStore;

/// Read the text of the selected pages of a PDF.
///
/// The selection is resolved and checked against the document's page count
/// before any page is read. A page whose text cannot be read is returned
/// with `text: None` instead of failing the whole call.
pub fn read_pages(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
    selection: &PageSelection,
) -> Result<Vec<PageContent>, TextporterError> {
    let page_numbers = selection.resolve()?;

    let document = extractor.open(pdf_path)?;
    let page_count = document.page_count();
    if let Some(&last) = page_numbers.last() {
        if last > page_count {
            return Err(TextporterError::InvalidPageRange(format!(
                "page {last} is beyond the end of the document ({page_count} pages)"
            )));
        }
    }

    let pages = page_numbers
        .iter()
        .map(|&page_number| {
            let text = match document.page_text(page_number - 1) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!(
                        page = page_number,
                        backend = extractor.backend_name(),
                        error = %e,
                        "failed to read page text"
                    );
                    None
                }
            };
            PageContent { page_number, text }
        })
        .collect();

    Ok(pages)
}

/// Main API entry point: extract speaker dialogue from the selected pages
/// of a PDF into `store`.
pub fn extract_pdf(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
    selection: &PageSelection,
    store: &mut StyleStore,
) -> Result<ExtractionReport, TextporterError> {
    let pages = read_pages(pdf_path, extractor, selection)?;
    let report = dialogue::extract(&pages, store)?;

    tracing::info!(
        pages = report.pages.len(),
        failed = report.failed_pages.len(),
        lines = report.dialogue_count(),
        new_speakers = report.new_speakers.len(),
        "extraction finished"
    );
    Ok(report)
}

/// Summary of a `render_pdf` run.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub extraction: ExtractionReport,
    pub placements: usize,
    pub layers: usize,
}

/// Extract dialogue from the selected pages and hand styled placements to
/// `sink`, one layer per page.
pub fn render_pdf(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
    selection: &PageSelection,
    store: &mut StyleStore,
    layout: &LayoutConfig,
    sink: &mut dyn RenderSink,
) -> Result<RenderSummary, TextporterError> {
    let pages = read_pages(pdf_path, extractor, selection)?;
    let extraction = dialogue::extract(&pages, store)?;

    let page_numbers: Vec<usize> = pages.iter().map(|p| p.page_number).collect();
    let plan = render::build_plan(&page_numbers, &extraction.pages, store, layout);
    let layers = render::render(&plan, sink)?;

    Ok(RenderSummary {
        extraction,
        placements: plan.len(),
        layers,
    })
}
