use serde::{Deserialize, Serialize};

use crate::dialogue::PageDialogues;
use crate::model::StyleRecord;
use crate::styles::StyleStore;

/// Fixed offsets used to position dialogue lines on a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub x: u32,
    pub base_y: u32,
    pub page_step: u32,
    pub line_step: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            x: 10,
            base_y: 50,
            page_step: 100,
            line_step: 20,
        }
    }
}

/// A dialogue line with its resolved style and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    pub page_number: usize,
    /// 1-based position of the page within the selection; one layer per value.
    pub layer: usize,
    pub speaker: String,
    pub text: String,
    pub style: StyleRecord,
    pub x: u32,
    pub y: u32,
}

impl PlacementRecord {
    pub fn layer_name(&self) -> String {
        layer_name(self.layer)
    }
}

pub fn layer_name(layer: usize) -> String {
    format!("Page {layer}")
}

/// Pair each dialogue line on the selected pages with its style and position.
///
/// The n-th selected page starts at `base_y + n * page_step`; each further
/// line on that page moves down by `line_step`. Pages without extracted
/// dialogue produce no placements but still advance the layer count.
pub fn build_plan(
    pages: &[usize],
    dialogues: &[PageDialogues],
    store: &StyleStore,
    layout: &LayoutConfig,
) -> Vec<PlacementRecord> {
    let mut plan = Vec::new();

    for (idx, &page_number) in pages.iter().enumerate() {
        let layer = idx + 1;
        let page_base = layout
            .base_y
            .saturating_add(layout.page_step.saturating_mul(layer as u32));

        let Some(page) = dialogues.iter().find(|d| d.page_number == page_number) else {
            tracing::debug!(page = page_number, "no dialogue to place");
            continue;
        };

        let mut y = page_base;
        for line in &page.lines {
            plan.push(PlacementRecord {
                page_number,
                layer,
                speaker: line.speaker.clone(),
                text: line.text.clone(),
                style: store.get(&line.speaker).style_only(),
                x: layout.x,
                y,
            });
            y = y.saturating_add(layout.line_step);
        }
    }

    plan
}
