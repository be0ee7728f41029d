//! Integration tests for the extract/render pipeline.
//!
//! Uses a MockExtractor that serves pre-built page texts without
//! invoking pdftotext, so these tests run without poppler-utils.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use textporter_core::error::TextporterError;
use textporter_core::extraction::{PageSource, PdfExtractor};
use textporter_core::model::{Rgb, StyleDefaults, StyleRecord};
use textporter_core::pages::PageSelection;
use textporter_core::render::svg::SvgSink;
use textporter_core::render::LayoutConfig;
use textporter_core::styles::{flat, snapshot, StyleStore};
use textporter_core::{extract_pdf, read_pages, render_pdf};

struct MockExtractor {
    /// `None` pages fail to read.
    pages: Vec<Option<&'static str>>,
    opened: AtomicUsize,
}

struct MockDocument {
    pages: Vec<Option<&'static str>>,
}

impl MockExtractor {
    fn new(pages: Vec<Option<&'static str>>) -> Self {
        MockExtractor {
            pages,
            opened: AtomicUsize::new(0),
        }
    }
}

impl PdfExtractor for MockExtractor {
    fn open(&self, _pdf_path: &Path) -> Result<Box<dyn PageSource>, TextporterError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockDocument {
            pages: self.pages.clone(),
        }))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

impl PageSource for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, TextporterError> {
        match self.pages.get(index) {
            Some(Some(text)) => Ok(text.to_string()),
            _ => Err(TextporterError::Extraction(format!("page {index} unreadable"))),
        }
    }
}

fn script() -> MockExtractor {
    MockExtractor::new(vec![
        Some("MIMOSA\nA kitchen. Morning.\nFern: Good morning!\nNorfolk (yawning): Is it?\n"),
        Some("Fern: Breakfast is ready.\nNorfolk: Already?\nFern (laughing): Hours ago.\n"),
        Some("THE END\n"),
    ])
}

// ---------------------------------------------------------------------------
// Test 1: Extraction folds dialogue into the store in document order
// ---------------------------------------------------------------------------
#[test]
fn extraction_collects_speakers_in_order() {
    let extractor = script();
    let mut store = StyleStore::new();

    let report = extract_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::from("1-3"),
        &mut store,
    )
    .unwrap();

    assert_eq!(store.list_speakers(false), vec!["Fern", "Norfolk"]);
    assert_eq!(
        store.get("Fern").dialogue_lines,
        vec!["Good morning!", "Breakfast is ready.", "Hours ago."]
    );
    assert_eq!(store.get("Norfolk").dialogue_lines, vec!["Is it?", "Already?"]);
    assert_eq!(report.dialogue_count(), 5);
    assert!(report.failed_pages.is_empty());
    assert!(report.page(3).unwrap().lines.is_empty());
    assert_eq!(extractor.opened.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Test 2: Invalid selections fail before the document is opened
// ---------------------------------------------------------------------------
#[test]
fn invalid_selection_fails_fast() {
    let extractor = script();
    let mut store = StyleStore::new();
    let before = store.clone();

    let result = extract_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::from("3-1"),
        &mut store,
    );

    assert!(matches!(result, Err(TextporterError::InvalidPageRange(_))));
    assert_eq!(extractor.opened.load(Ordering::SeqCst), 0);
    assert_eq!(store, before);
}

// ---------------------------------------------------------------------------
// Test 3: Pages beyond the document are rejected before extraction
// ---------------------------------------------------------------------------
#[test]
fn pages_beyond_document_rejected() {
    let extractor = script();
    let mut store = StyleStore::new();

    let result = extract_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::Explicit(vec![2, 9]),
        &mut store,
    );

    assert!(matches!(result, Err(TextporterError::InvalidPageRange(_))));
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// Test 4: An unreadable page is treated as empty and reported
// ---------------------------------------------------------------------------
#[test]
fn unreadable_page_is_recovered() {
    let extractor = MockExtractor::new(vec![Some("Tom: Hi"), None, Some("Tom: Again")]);
    let mut store = StyleStore::new();

    let report = extract_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::Interval(1, 3),
        &mut store,
    )
    .unwrap();

    assert_eq!(report.failed_pages, vec![2]);
    assert_eq!(store.get("Tom").dialogue_lines, vec!["Hi", "Again"]);
}

// ---------------------------------------------------------------------------
// Test 5: Page numbers are 1-based at the boundary
// ---------------------------------------------------------------------------
#[test]
fn read_pages_converts_to_zero_based() {
    let extractor = script();
    let pages = read_pages(Path::new("script.pdf"), &extractor, &PageSelection::Single(2)).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_number, 2);
    assert!(pages[0].text.as_deref().unwrap().starts_with("Fern: Breakfast"));
}

// ---------------------------------------------------------------------------
// Test 6: Rendering uses stored styles and one layer per page
// ---------------------------------------------------------------------------
#[test]
fn render_uses_loaded_styles() {
    let extractor = script();
    let mut store = flat::parse_flat(
        "[Fern]\nfont = Georgia\nsize = 18\ncolor = [200, 0, 0]\n",
        &StyleDefaults::default(),
    )
    .unwrap();
    let mut sink = SvgSink::new();

    let summary = render_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::from("1,2"),
        &mut store,
        &LayoutConfig::default(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(summary.placements, 5);
    assert_eq!(summary.layers, 2);
    assert_eq!(sink.layers[0].name, "Page 1");
    assert_eq!(sink.layers[1].name, "Page 2");

    let first = &sink.layers[0].svg;
    assert!(first.contains(
        r#"<text x="10" y="150" font-size="18" font-family="Georgia" fill="rgb(200,0,0)">Good morning!</text>"#
    ));
    assert!(first.contains(
        r#"<text x="10" y="170" font-size="14" font-family="Arial" fill="rgb(0,0,0)">Is it?</text>"#
    ));
    assert!(sink.layers[1].svg.contains(r#"y="250""#));
}

// ---------------------------------------------------------------------------
// Test 7: Extracted store survives a snapshot round trip
// ---------------------------------------------------------------------------
#[test]
fn extracted_store_round_trips_through_snapshot() {
    let extractor = script();
    let mut store = StyleStore::new();
    store
        .upsert("Norfolk", StyleRecord::new("Courier", 12, Rgb(0, 0, 255)))
        .unwrap();

    extract_pdf(
        Path::new("script.pdf"),
        &extractor,
        &PageSelection::from("1-2"),
        &mut store,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("character_styles.json");
    snapshot::save_snapshot(&store, &path).unwrap();
    let loaded = snapshot::load_snapshot(&path, &StyleDefaults::default()).unwrap();

    assert_eq!(loaded, store);
    assert_eq!(loaded.get("Norfolk").font, "Courier");
    assert_eq!(loaded.get("Norfolk").dialogue_lines.len(), 2);
}

// ---------------------------------------------------------------------------
// Test 8: A failed snapshot load leaves the current store untouched
// ---------------------------------------------------------------------------
#[test]
fn failed_load_does_not_touch_current_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"Tom\": ").unwrap();

    let mut store = StyleStore::new();
    store.record_dialogue("Ann", "Hello").unwrap();
    let before = store.clone();

    match snapshot::load_snapshot(&path, &StyleDefaults::default()) {
        Ok(loaded) => store = loaded,
        Err(e) => assert!(matches!(e, TextporterError::ParseError(_))),
    }

    assert_eq!(store, before);
}
