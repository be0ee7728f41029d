use crate::error::TextporterError;
use crate::extraction::{PageSource, PdfExtractor};
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`), so a speaker label and its
/// line stay together on one text line.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn open(&self, pdf_path: &Path) -> Result<Box<dyn PageSource>, TextporterError> {
        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(pdf_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TextporterError::PdftotextNotFound
                } else {
                    TextporterError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TextporterError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(path = %pdf_path.display(), pages = pages.len(), "opened document");

        Ok(Box::new(PdftotextDocument { pages }))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Page texts of one pdftotext run.
struct PdftotextDocument {
    pages: Vec<String>,
}

impl PageSource for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, TextporterError> {
        self.pages.get(index).cloned().ok_or_else(|| {
            TextporterError::Extraction(format!(
                "page index {} out of bounds (document has {} pages)",
                index,
                self.pages.len()
            ))
        })
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext terminates every page with a form feed (`\x0c`), so the piece
/// after the last one is dropped when empty.
fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\x0c').map(|p| p.to_string()).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}
