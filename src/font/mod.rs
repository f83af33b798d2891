//! Emoji font loading and introspection
//!
//! Handles:
//! - Locating the system emoji font (collection path first, single-font second)
//! - TTC font collections (the first embedded font is used)
//! - Character set enumeration (cmap)
//! - Codepoint sequence layout (rustybuzz shaping)
//! - Embedded bitmap extraction (sbix / CBDT strikes)
//!
//! The pipeline only sees the [`FontSource`] trait, so any backend that can
//! enumerate codepoints, lay out a string and hand back glyph bitmaps is
//! substitutable without touching the enumeration or accumulation logic.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rustybuzz::ttf_parser;
use thiserror::Error;

use crate::config::FontPathsConfig;

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontError {
    /// Neither candidate path exists. Non-fatal: the run degrades to
    /// producing no output.
    #[error("could not find the emoji font at any candidate path")]
    NotFound,
    /// The file exists but is not a parseable font.
    #[error("failed to parse font file: {}", .0.display())]
    Parse(PathBuf),
    /// The file exists but could not be read.
    #[error("failed to read font file")]
    Io(#[from] std::io::Error),
}

/// Capability exposed by an opened font.
///
/// Exactly the three operations the generation pass needs, nothing else.
pub trait FontSource {
    /// Every codepoint the font's character map covers.
    fn character_set(&self) -> Vec<u32>;

    /// Lay out a codepoint string, returning the resulting glyph ids.
    /// A sequence is supported iff this returns exactly one glyph.
    fn layout(&self, text: &str) -> Vec<u16>;

    /// Embedded bitmap bytes for a glyph, taken from the strike nearest
    /// `size` pixels. None for vector-only or empty glyphs.
    fn raster_image(&self, glyph: u16, size: u16) -> Option<Vec<u8>>;
}

/// Production [`FontSource`] backed by a `rustybuzz::Face`.
pub struct EmojiFont {
    face: rustybuzz::Face<'static>,
}

impl EmojiFont {
    /// Open the emoji font from the first candidate path that exists.
    /// The collection path takes priority over the single-font path.
    pub fn locate(paths: &FontPathsConfig) -> Result<Self, FontError> {
        for candidate in [&paths.collection, &paths.single] {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load(path);
            }
            debug!("No font at {}", path.display());
        }
        Err(FontError::NotFound)
    }

    /// Load a font (or font collection) from a file.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path)?;

        // rustybuzz::Face borrows the font data for its whole life, and the
        // font is opened exactly once per run, so leaking the buffer to
        // 'static is acceptable.
        let static_data: &'static [u8] = Box::leak(data.into_boxed_slice());

        if let Some(count) = ttf_parser::fonts_in_collection(static_data) {
            // The embedded fonts in the system emoji collection are
            // functionally identical; the first one stands in for all.
            info!(
                "{}: collection with {} fonts, using the first",
                path.display(),
                count
            );
        }

        let face = rustybuzz::Face::from_slice(static_data, 0)
            .ok_or_else(|| FontError::Parse(path.to_path_buf()))?;

        info!("Loaded emoji font: {}", path.display());
        Ok(Self { face })
    }
}

impl FontSource for EmojiFont {
    fn character_set(&self) -> Vec<u32> {
        let mut set = BTreeSet::new();
        if let Some(cmap) = self.face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    set.insert(cp);
                });
            }
        }
        debug!("Character set: {} codepoints", set.len());
        set.into_iter().collect()
    }

    fn layout(&self, text: &str) -> Vec<u16> {
        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let glyphs = rustybuzz::shape(&self.face, &[], buffer);
        glyphs
            .glyph_infos()
            .iter()
            .map(|info| info.glyph_id as u16)
            .collect()
    }

    fn raster_image(&self, glyph: u16, size: u16) -> Option<Vec<u8>> {
        let image = self
            .face
            .glyph_raster_image(ttf_parser::GlyphId(glyph), size)?;
        if !matches!(image.format, ttf_parser::RasterImageFormat::PNG) {
            trace!("Glyph {} has a non-PNG raster image, skipping", glyph);
            return None;
        }
        trace!(
            "Glyph {}: {}x{} image at {} ppem",
            glyph,
            image.width,
            image.height,
            image.pixels_per_em
        );
        Some(image.data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_font() {
        let paths = FontPathsConfig {
            collection: "/nonexistent/emoji.ttc".to_string(),
            single: "/nonexistent/emoji.ttf".to_string(),
        };
        assert!(matches!(EmojiFont::locate(&paths), Err(FontError::NotFound)));
    }

    #[test]
    fn test_load_garbage_file() {
        let path = std::env::temp_dir().join(format!("emojigen_garbage_{}", std::process::id()));
        fs::write(&path, b"this is not a font").unwrap();
        let result = EmojiFont::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(FontError::Parse(_))));
    }
}
