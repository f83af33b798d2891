//! Configuration file management
//!
//! Loads TOML configuration files and provides generation settings.
//! Default config path: ~/.config/emojigen/config.toml
//!
//! Everything has built-in defaults matching the system emoji font on
//! macOS, so running without a config file is the normal case. The
//! modifier list lives here rather than in code because it encodes
//! emoji-standard knowledge that changes between Unicode releases.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_COLLECTION_PATH, DEFAULT_FONT_PATH, DEFAULT_GLYPH_SIZE, DEFAULT_IMAGES_DIR,
    DEFAULT_MODIFIERS, DEFAULT_PATTERN_FILE, FEMALE_SIGN, ZWJ,
};

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font location settings
    pub font: FontPathsConfig,
    /// Output path settings
    pub output: OutputConfig,
    /// Glyph extraction settings
    pub glyph: GlyphConfig,
    /// Modifier sequence settings
    pub modifiers: ModifierConfig,
}

/// Font location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPathsConfig {
    /// Font collection path, checked first (first embedded font is used)
    pub collection: String,
    /// Single-font path, checked second
    pub single: String,
}

/// Output path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for extracted glyph images (removed and recreated per run)
    pub images_dir: String,
    /// Path of the generated pattern source file
    pub pattern_file: String,
}

/// Glyph extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Target image size in pixels (the nearest embedded strike is used)
    pub size: u16,
}

/// Modifier sequence settings
///
/// Each modifier is a string of one or more codepoints appended to a base
/// character (skin tones, keycap enclosures). The female joiner is appended
/// after a modifier, or alone, to request the female glyph variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    /// Combining modifiers tested against every codepoint
    pub modifiers: Vec<String>,
    /// Joiner sequence requesting the female variant (ZWJ + female sign)
    pub female_joiner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: FontPathsConfig::default(),
            output: OutputConfig::default(),
            glyph: GlyphConfig::default(),
            modifiers: ModifierConfig::default(),
        }
    }
}

impl Default for FontPathsConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION_PATH.to_string(),
            single: DEFAULT_FONT_PATH.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            pattern_file: DEFAULT_PATTERN_FILE.to_string(),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GLYPH_SIZE,
        }
    }
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            modifiers: DEFAULT_MODIFIERS.iter().map(|s| s.to_string()).collect(),
            female_joiner: format!("{}{}", ZWJ, FEMALE_SIGN),
        }
    }
}

impl Config {
    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("emojigen").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }
        None
    }

    /// Load configuration with priority:
    /// 1. ~/.config/emojigen/config.toml (user config)
    /// 2. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(path.to_string_lossy().as_ref()) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.glyph.size, 64);
        assert!(config.font.collection.ends_with(".ttc"));
        assert!(config.font.single.ends_with(".ttf"));
        assert_eq!(config.modifiers.modifiers.len(), 7);
        assert_eq!(config.modifiers.female_joiner, "\u{200D}\u{2640}");
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [glyph]
            size = 32

            [output]
            images_dir = "out/images"
            "#,
        )
        .unwrap();
        assert_eq!(config.glyph.size, 32);
        assert_eq!(config.output.images_dir, "out/images");
        // Unspecified sections fall back to defaults
        assert!(config.font.collection.ends_with(".ttc"));
        assert_eq!(config.modifiers.modifiers.len(), 7);
    }

    #[test]
    fn test_modifier_override() {
        let config: Config = toml::from_str(
            "[modifiers]\nmodifiers = [\"\\u20E3\"]\n",
        )
        .unwrap();
        assert_eq!(config.modifiers.modifiers, vec!["\u{20E3}".to_string()]);
        // Joiner keeps its default
        assert_eq!(config.modifiers.female_joiner, "\u{200D}\u{2640}");
    }
}
