pub mod pdftotext;

use std::path::Path;

use crate::error::TextporterError;

/// Raw text of a single page. `text` is `None` when the backend could not
/// produce anything for that page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    pub text: Option<String>,
}

/// An open document. Pages are addressed 0-based.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page_text(&self, index: usize) -> Result<String, TextporterError>;
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Open a document. The returned handle should be dropped as soon as
    /// the pages it is needed for have been read.
    fn open(&self, pdf_path: &Path) -> Result<Box<dyn PageSource>, TextporterError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
