//! Configuration loading for the byeol screensaver.
//!
//! Settings live in a TOML file under the platform config directory.
//! Every field has a built-in default, so byeol runs without any file
//! present.

use std::fs;
use std::path::PathBuf;

use byeol_core::{COLOR_CYCLE_STEP, Palette, Rgb};
use directories::ProjectDirs;
use serde::Deserialize;

/// Default phrases for the falling-text elements.
const DEFAULT_PHRASES: [&str; 6] = [
    "You are made of starlight",
    "Meet me among the stars",
    "The night sky misses you",
    "Brighter than every star",
    "My universe, always",
    "Counting stars until you",
];

/// Default text color cycle, in order.
const DEFAULT_TEXT_COLORS: [&str; 7] = [
    "#FFD700", "#FFA500", "#ADFF2F", "#00FFFF", "#FF69B4", "#FFFFFF", "#9932CC",
];

/// User-facing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Phrases drawn by falling text elements.
    pub phrases: Vec<String>,
    /// Sprite art files for the sparkle/image kind. Empty means the
    /// built-in art is used.
    pub image_sprites: Vec<PathBuf>,
    /// Sprite art files for the heart kind. Empty means the built-in
    /// art is used.
    pub heart_sprites: Vec<PathBuf>,
    /// Text color cycle as `#RRGGBB` entries.
    pub text_colors: Vec<String>,
    /// Per-frame color blend increment.
    pub color_cycle_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            image_sprites: Vec::new(),
            heart_sprites: Vec::new(),
            text_colors: DEFAULT_TEXT_COLORS.iter().map(|s| s.to_string()).collect(),
            color_cycle_step: COLOR_CYCLE_STEP,
        }
    }
}

impl Config {
    /// Load the configuration file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_toml(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Location of the config file, when a home directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Build the text palette, skipping malformed entries. An entirely
    /// unusable list falls back to the default palette.
    pub fn text_palette(&self) -> Palette {
        let colors: Vec<Rgb> = self
            .text_colors
            .iter()
            .filter_map(|entry| {
                let parsed = Rgb::from_hex(entry);
                if parsed.is_none() {
                    log::warn!("ignoring malformed text color {entry:?}");
                }
                parsed
            })
            .collect();
        Palette::new(colors).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.phrases.len(), 6);
        assert_eq!(config.text_colors.len(), 7);
        assert!(config.image_sprites.is_empty());
        assert_eq!(config.color_cycle_step, COLOR_CYCLE_STEP);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("phrases = [\"hello\"]").unwrap();
        assert_eq!(config.phrases, vec!["hello".to_string()]);
        assert_eq!(config.text_colors.len(), 7);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml("starz = 3").is_err());
    }

    #[test]
    fn test_text_palette_skips_malformed() {
        let mut config = Config::default();
        config.text_colors = vec!["#FF0000".into(), "nope".into(), "#0000FF".into()];
        assert_eq!(config.text_palette().len(), 2);
    }

    #[test]
    fn test_text_palette_falls_back_when_unusable() {
        let mut config = Config::default();
        config.text_colors = vec!["nope".into()];
        assert_eq!(config.text_palette().len(), 7);
    }
}
