pub mod plan;
pub mod svg;

pub use plan::{build_plan, layer_name, LayoutConfig, PlacementRecord};

use crate::error::TextporterError;

/// Receives placements one layer at a time.
pub trait RenderSink {
    fn render_layer(
        &mut self,
        layer_name: &str,
        placements: &[PlacementRecord],
    ) -> Result<(), TextporterError>;
}

/// Hand a plan to `sink`, one call per layer in plan order.
///
/// Returns the number of layers rendered.
pub fn render(plan: &[PlacementRecord], sink: &mut dyn RenderSink) -> Result<usize, TextporterError> {
    let mut layers = 0;
    for group in plan.chunk_by(|a, b| a.layer == b.layer) {
        let name = group[0].layer_name();
        sink.render_layer(&name, group)?;
        layers += 1;
    }
    Ok(layers)
}
