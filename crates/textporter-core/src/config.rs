use serde::Deserialize;
use std::path::Path;

use crate::error::TextporterError;
use crate::model::{DefaultProfile, Rgb, StyleDefaults};
use crate::render::LayoutConfig;

/// Engine settings, usually read from a TOML file.
///
/// ```toml
/// [defaults]
/// profile = "legacy"
/// size = 12
///
/// [layout]
/// base_y = 40
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub defaults: DefaultsConfig,
    pub layout: LayoutConfig,
}

/// Built-in default style: a profile plus optional per-field overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub profile: DefaultProfile,
    pub font: Option<String>,
    pub size: Option<u32>,
    pub color: Option<Rgb>,
}

impl EngineConfig {
    pub fn style_defaults(&self) -> StyleDefaults {
        let mut defaults = StyleDefaults::for_profile(self.defaults.profile);
        if let Some(ref font) = self.defaults.font {
            defaults.font = font.clone();
        }
        if let Some(size) = self.defaults.size {
            defaults.size = size;
        }
        if let Some(color) = self.defaults.color {
            defaults.color = color;
        }
        defaults
    }

    fn validate(&self) -> Result<(), String> {
        self.style_defaults()
            .record()
            .validate()
            .map_err(|e| format!("[defaults]: {e}"))
    }
}

/// Load engine settings from a TOML file.
pub fn load_config(path: &Path) -> Result<EngineConfig, TextporterError> {
    let content = std::fs::read_to_string(path).map_err(|e| TextporterError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse engine settings from a TOML string.
pub fn parse_config(toml_str: &str, source: &Path) -> Result<EngineConfig, TextporterError> {
    let config: EngineConfig = toml::from_str(toml_str).map_err(|e| TextporterError::Config {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    config.validate().map_err(|reason| TextporterError::Config {
        path: source.to_path_buf(),
        reason,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<EngineConfig, TextporterError> {
        parse_config(s, Path::new("textporter.toml"))
    }

    #[test]
    fn test_empty_config_uses_canonical_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.style_defaults(), StyleDefaults::default());
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_legacy_profile_with_override() {
        let config = parse(
            r#"
[defaults]
profile = "legacy"
font = "Comic Neue"

[layout]
base_y = 40
"#,
        )
        .unwrap();

        let defaults = config.style_defaults();
        assert_eq!(defaults.font, "Comic Neue");
        assert_eq!(defaults.size, 10);
        assert_eq!(defaults.color, Rgb::GREEN);
        assert_eq!(config.layout.base_y, 40);
        assert_eq!(config.layout.line_step, 20);
    }

    #[test]
    fn test_color_override() {
        let config = parse("[defaults]\ncolor = [10, 20, 30]\n").unwrap();
        assert_eq!(config.style_defaults().color, Rgb(10, 20, 30));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(parse("[defaults]\nprofile = \"fancy\"\n").is_err());
        assert!(parse("[defaults]\nsize = 0\n").is_err());
        assert!(parse("[defaults]\ncolor = [1, 2, 999]\n").is_err());
        assert!(parse("[unknown]\nx = 1\n").is_err());
    }
}
