//! The generation pipeline
//!
//! A single synchronous pass over every candidate sequence: flags first,
//! then each codepoint in the font's character set with its modifier
//! combinations. A candidate that lays out to exactly one glyph is
//! accepted; its bitmap (if any) is written out and its codepoints feed
//! the pattern accumulator. One owner for everything — the font, the
//! output directory and the accumulator never cross a thread boundary.

pub mod images;
pub mod regex;
pub mod sequence;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, trace, warn};

use crate::config::Config;
use crate::font::FontSource;
use crate::generate::regex::PatternSet;
use crate::generate::sequence::Candidate;

/// Counters reported after a run
#[derive(Debug, Default)]
pub struct Summary {
    /// Candidates that laid out to exactly one glyph
    pub sequences_accepted: usize,
    /// Accepted glyphs that carried a bitmap and were written to disk
    pub images_written: usize,
}

/// Run the whole generation: wipe and recreate the images directory, test
/// every candidate, write accepted glyph images and the pattern source.
///
/// Flag pairs are processed before the character-set pass so their
/// fragments are registered before single codepoints reuse the
/// accumulator.
pub fn run<F: FontSource>(font: &F, config: &Config) -> Result<Summary> {
    let images_dir = Path::new(&config.output.images_dir);
    recreate_dir(images_dir)?;

    let mut patterns = PatternSet::new();
    let mut summary = Summary::default();
    let size = config.glyph.size;

    for candidate in sequence::flag_pairs() {
        try_candidate(font, &candidate, images_dir, size, &mut patterns, &mut summary)?;
    }
    info!("Flag pass done: {} sequences accepted", summary.sequences_accepted);

    for cp in font.character_set() {
        // cmap entries outside the scalar value range cannot form a
        // candidate string
        let Some(base) = char::from_u32(cp) else {
            trace!("Skipping non-scalar cmap entry {:#x}", cp);
            continue;
        };
        for candidate in sequence::codepoint_candidates(base, &config.modifiers) {
            try_candidate(font, &candidate, images_dir, size, &mut patterns, &mut summary)?;
        }
    }

    if patterns.is_empty() {
        warn!("No supported sequences found; skipping pattern file");
        return Ok(summary);
    }

    let pattern = patterns.finalize();
    regex::write_pattern_source(Path::new(&config.output.pattern_file), &pattern)?;
    info!("Wrote pattern source: {}", config.output.pattern_file);

    Ok(summary)
}

/// Resolve one candidate and, when accepted, feed both outputs
fn try_candidate<F: FontSource>(
    font: &F,
    candidate: &Candidate,
    images_dir: &Path,
    size: u16,
    patterns: &mut PatternSet,
    summary: &mut Summary,
) -> Result<()> {
    let glyphs = font.layout(&candidate.text);
    if glyphs.len() != 1 {
        // Expected for most modifier combinations
        return Ok(());
    }

    let codepoints = candidate.codepoints();
    summary.sequences_accepted += 1;
    patterns.add(&codepoints);

    if images::write_glyph_image(font, glyphs[0], &codepoints, images_dir, size)? {
        summary.images_written += 1;
    }
    Ok(())
}

/// Destructively recreate the output directory so every run starts clean
fn recreate_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {}", dir.display()));
        }
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}
