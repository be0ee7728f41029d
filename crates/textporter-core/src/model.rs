use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TextporterError;

/// Key of the fallback style every store carries.
pub const DEFAULT_STYLE: &str = "default";

/// An RGB color, serialized as a three-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);

    /// Parse a color from either `R,G,B` or `[R, G, B]` form.
    pub fn from_str_loose(s: &str) -> Result<Rgb, TextporterError> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or_else(|| {
                TextporterError::ParseError(format!("unterminated color list '{trimmed}'"))
            })?,
            None => trimmed,
        };

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(TextporterError::ParseError(format!(
                "color '{trimmed}' must have exactly three components"
            )));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| {
                TextporterError::ParseError(format!(
                    "color component '{part}' in '{trimmed}' is not an integer in 0..=255"
                ))
            })?;
        }

        Ok(Rgb(channels[0], channels[1], channels[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Visual style of one speaker plus the dialogue lines extracted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    pub font: String,
    pub size: u32,
    pub color: Rgb,
    /// Dialogue lines in encounter order. Omitted from snapshots when empty.
    #[serde(
        rename = "dialogues",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dialogue_lines: Vec<String>,
}

impl StyleRecord {
    pub fn new(font: impl Into<String>, size: u32, color: Rgb) -> Self {
        StyleRecord {
            font: font.into(),
            size,
            color,
            dialogue_lines: Vec::new(),
        }
    }

    /// Copy of this style with no dialogue lines attached.
    pub fn style_only(&self) -> StyleRecord {
        StyleRecord::new(self.font.clone(), self.size, self.color)
    }

    pub fn validate(&self) -> Result<(), TextporterError> {
        if self.font.trim().is_empty() {
            return Err(TextporterError::InvalidStyle("font must not be empty".into()));
        }
        if self.size == 0 {
            return Err(TextporterError::InvalidStyle(
                "size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Built-in default style profiles.
///
/// `Standard` is the canonical default (Arial, 14pt, black). `Legacy`
/// reproduces the older settings (Arial, 10pt, green).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultProfile {
    #[default]
    Standard,
    Legacy,
}

/// Values used to synthesize the `"default"` style and to fill in
/// fields missing from a flat style file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefaults {
    pub font: String,
    pub size: u32,
    pub color: Rgb,
}

impl StyleDefaults {
    pub fn for_profile(profile: DefaultProfile) -> Self {
        match profile {
            DefaultProfile::Standard => StyleDefaults {
                font: "Arial".into(),
                size: 14,
                color: Rgb::BLACK,
            },
            DefaultProfile::Legacy => StyleDefaults {
                font: "Arial".into(),
                size: 10,
                color: Rgb::GREEN,
            },
        }
    }

    /// The record inserted under `"default"` when a store lacks one.
    pub fn record(&self) -> StyleRecord {
        StyleRecord::new(self.font.clone(), self.size, self.color)
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self::for_profile(DefaultProfile::Standard)
    }
}

/// One dialogue line attributed to a speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}
