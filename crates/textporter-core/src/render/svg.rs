use std::fmt::Write as _;

use quick_xml::escape::escape;

use super::plan::PlacementRecord;
use super::RenderSink;
use crate::error::TextporterError;

/// One rendered layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgLayer {
    pub name: String,
    pub svg: String,
}

/// Collects one SVG document per layer, one `<text>` element per placement.
#[derive(Debug, Default)]
pub struct SvgSink {
    pub layers: Vec<SvgLayer>,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for SvgSink {
    fn render_layer(
        &mut self,
        layer_name: &str,
        placements: &[PlacementRecord],
    ) -> Result<(), TextporterError> {
        self.layers.push(SvgLayer {
            name: layer_name.to_string(),
            svg: layer_svg(placements),
        });
        Ok(())
    }
}

pub fn layer_svg(placements: &[PlacementRecord]) -> String {
    let mut out = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\">\n");
    for p in placements {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{}\" fill=\"rgb({},{},{})\">{}</text>",
            p.x,
            p.y,
            p.style.size,
            escape(p.style.font.as_str()),
            p.style.color.0,
            p.style.color.1,
            p.style.color.2,
            escape(p.text.as_str()),
        );
    }
    out.push_str("</svg>\n");
    out
}
