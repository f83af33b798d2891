//! Glyph image extraction
//!
//! Writes the embedded bitmap of an accepted glyph to a file named after
//! its originating codepoints. Filenames are a pure function of the
//! codepoint list, so re-running the generation always produces the same
//! set of names, and two sequences resolving to the same glyph get their
//! own files with identical bytes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::trace;

use crate::font::FontSource;

/// Image filename for a codepoint list: each codepoint as lowercase hex
/// zero-padded to at least four digits, joined by hyphens
pub fn image_filename(codepoints: &[u32]) -> String {
    let parts: Vec<String> = codepoints.iter().map(|cp| format!("{:04x}", cp)).collect();
    format!("{}.png", parts.join("-"))
}

/// Extract the glyph's bitmap at the target size and write it under
/// `images_dir`. Returns false when the glyph has no raster image — an
/// expected case (vector-only or empty glyph), not an error.
pub fn write_glyph_image<F: FontSource>(
    font: &F,
    glyph: u16,
    codepoints: &[u32],
    images_dir: &Path,
    size: u16,
) -> Result<bool> {
    let Some(data) = font.raster_image(glyph, size) else {
        trace!("Glyph {} has no raster image, skipping", glyph);
        return Ok(false);
    };

    let path = images_dir.join(image_filename(codepoints));
    fs::write(&path, &data)
        .with_context(|| format!("Failed to write glyph image: {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_single_codepoint() {
        assert_eq!(image_filename(&[0x41]), "0041.png");
    }

    #[test]
    fn test_filename_astral_codepoints() {
        // Codepoints above U+FFFF widen past four digits
        assert_eq!(image_filename(&[0x1F1E6, 0x1F1E7]), "1f1e6-1f1e7.png");
    }

    #[test]
    fn test_filename_mixed_widths() {
        assert_eq!(image_filename(&[0x23, 0x20E3]), "0023-20e3.png");
    }

    #[test]
    fn test_filename_deterministic() {
        let cps = vec![0x1F469, 0x1F3FD, 0x200D, 0x2640];
        assert_eq!(image_filename(&cps), image_filename(&cps));
        assert_eq!(image_filename(&cps), "1f469-1f3fd-200d-2640.png");
    }
}
