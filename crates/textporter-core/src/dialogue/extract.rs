use serde::{Deserialize, Serialize};

use super::classify::classify;
use crate::error::TextporterError;
use crate::extraction::PageContent;
use crate::model::DialogueLine;
use crate::styles::StyleStore;

/// Dialogue lines found on one page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDialogues {
    pub page_number: usize,
    pub lines: Vec<DialogueLine>,
}

/// Outcome of an extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// One entry per processed page, in the order supplied.
    pub pages: Vec<PageDialogues>,
    /// Pages whose text could not be read. They contributed no lines.
    pub failed_pages: Vec<usize>,
    /// Speakers added to the store during this pass, in encounter order.
    pub new_speakers: Vec<String>,
}

impl ExtractionReport {
    pub fn dialogue_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    pub fn page(&self, page_number: usize) -> Option<&PageDialogues> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }
}

/// Fold the dialogue found in `pages` into `store`.
///
/// Pages are processed in the order given. Unknown speakers are created
/// from the current `"default"` style; every matched line is appended to
/// its speaker's dialogue list. A page without text counts as empty.
pub fn extract(
    pages: &[PageContent],
    store: &mut StyleStore,
) -> Result<ExtractionReport, TextporterError> {
    let mut report = ExtractionReport::default();

    for page in pages {
        let mut found = Vec::new();

        match page.text.as_deref() {
            Some(text) => {
                for line in text.lines() {
                    let Some(dialogue) = classify(line) else {
                        continue;
                    };
                    if !store.contains(&dialogue.speaker) {
                        report.new_speakers.push(dialogue.speaker.clone());
                    }
                    store.record_dialogue(&dialogue.speaker, &dialogue.text)?;
                    found.push(dialogue);
                }
            }
            None => {
                tracing::warn!(page = page.page_number, "no text for page, treating as empty");
                report.failed_pages.push(page.page_number);
            }
        }

        tracing::debug!(page = page.page_number, lines = found.len(), "extracted dialogue");
        report.pages.push(PageDialogues {
            page_number: page.page_number,
            lines: found,
        });
    }

    Ok(report)
}
