//! Pattern accumulation and generated source emission
//!
//! Accepted sequences accumulate into two disjoint structures: single
//! codepoints go into a set that compresses to character-class ranges,
//! multi-codepoint sequences become literal alternation fragments. The
//! finalized pattern puts the fragments first, sorted in reverse lexical
//! order, so longer and more specific alternatives are tried before their
//! prefixes.
//!
//! The result is serialized as an autogenerated Rust source file exporting
//! the pattern text for an external runtime matcher.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::constants::{
    VARIATION_SELECTOR_RANGE_END, VARIATION_SELECTOR_RANGE_START, VS_EMOJI, VS_TEXT,
};

/// Accumulator for the generated pattern
///
/// Built incrementally over the whole enumeration, finalized exactly once.
#[derive(Debug, Default)]
pub struct PatternSet {
    /// Sequences of exactly one codepoint, compressed into ranges at the end
    singles: BTreeSet<u32>,
    /// Literal fragments for sequences of more than one codepoint
    fragments: Vec<String>,
}

/// A codepoint as a pattern escape, lowercase hex, at least four digits
fn escape(cp: u32) -> String {
    format!("\\u{{{:04x}}}", cp)
}

/// Literal fragment for a multi-codepoint sequence. An optional emoji
/// variation selector is allowed between any two codepoints.
fn fragment(codepoints: &[u32]) -> String {
    let parts: Vec<String> = codepoints.iter().map(|&cp| escape(cp)).collect();
    let joiner = format!("{}?", escape(VS_EMOJI));
    parts.join(joiner.as_str())
}

/// Character class covering a codepoint set, with consecutive runs
/// collapsed into ranges
fn character_class(singles: &BTreeSet<u32>) -> String {
    let mut out = String::from("[");
    let mut run: Option<(u32, u32)> = None;

    let flush = |out: &mut String, start: u32, end: u32| {
        out.push_str(&escape(start));
        if end > start {
            out.push('-');
            out.push_str(&escape(end));
        }
    };

    for &cp in singles {
        run = match run {
            Some((start, end)) if cp == end + 1 => Some((start, cp)),
            Some((start, end)) => {
                flush(&mut out, start, end);
                Some((cp, cp))
            }
            None => Some((cp, cp)),
        };
    }
    if let Some((start, end)) = run {
        flush(&mut out, start, end);
    }

    out.push(']');
    out
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.fragments.is_empty()
    }

    /// Record an accepted sequence
    pub fn add(&mut self, codepoints: &[u32]) {
        match codepoints {
            [] => {}
            [cp] => {
                self.singles.insert(*cp);
            }
            _ => self.fragments.push(fragment(codepoints)),
        }
    }

    /// Assemble the final pattern: literal fragments in reverse lexical
    /// order, then the compressed class, wrapped in a group with the
    /// optional variation-selector suffix and the text-style rejection
    pub fn finalize(&self) -> String {
        let mut alternatives = self.fragments.clone();
        alternatives.sort();
        alternatives.reverse();
        if !self.singles.is_empty() {
            alternatives.push(character_class(&self.singles));
        }

        debug!(
            "Pattern: {} fragments, {} single codepoints",
            self.fragments.len(),
            self.singles.len()
        );

        format!(
            "(?:{})[{}-{}{}]?(?!{})",
            alternatives.join("|"),
            escape(VARIATION_SELECTOR_RANGE_START),
            escape(VARIATION_SELECTOR_RANGE_END),
            escape(VS_EMOJI),
            escape(VS_TEXT)
        )
    }
}

/// Write the finalized pattern as a Rust source file for the runtime matcher
pub fn write_pattern_source(path: &Path, pattern: &str) -> Result<()> {
    let src = format!(
        "// AUTOGENERATED by emojigen. DO NOT EDIT.\n\
         \n\
         /// Matches every emoji sequence supported by the source font.\n\
         ///\n\
         /// Multi-codepoint alternatives come before their prefixes, so a\n\
         /// leftmost-first engine naturally prefers the longest sequence.\n\
         /// The trailing text-style selector rejection needs an engine with\n\
         /// lookaround support.\n\
         pub const EMOJI_PATTERN: &str =\n    r\"{}\";\n",
        pattern
    );
    fs::write(path, src)
        .with_context(|| format!("Failed to write pattern source: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_padding() {
        assert_eq!(escape(0x23), "\\u{0023}");
        assert_eq!(escape(0x1F1E6), "\\u{1f1e6}");
    }

    #[test]
    fn test_fragment_interior_selector() {
        assert_eq!(
            fragment(&[0x1F1E6, 0x1F1E7]),
            "\\u{1f1e6}\\u{fe0f}?\\u{1f1e7}"
        );
    }

    #[test]
    fn test_class_compression() {
        let singles: BTreeSet<u32> = [0x23, 0x2A, 0x30, 0x31, 0x32, 0x33].into_iter().collect();
        assert_eq!(
            character_class(&singles),
            "[\\u{0023}\\u{002a}\\u{0030}-\\u{0033}]"
        );
    }

    #[test]
    fn test_class_single_run() {
        let singles: BTreeSet<u32> = [0x41].into_iter().collect();
        assert_eq!(character_class(&singles), "[\\u{0041}]");
    }

    #[test]
    fn test_singles_only_pattern() {
        let mut set = PatternSet::new();
        set.add(&[0x41]);
        assert_eq!(
            set.finalize(),
            "(?:[\\u{0041}])[\\u{fe00}-\\u{fe0d}\\u{fe0f}]?(?!\\u{fe0e})"
        );
    }

    #[test]
    fn test_fragments_before_class() {
        let mut set = PatternSet::new();
        set.add(&[0x41]);
        set.add(&[0x1F1E6, 0x1F1E7]);
        let pattern = set.finalize();
        let frag_pos = pattern.find("\\u{1f1e6}").unwrap();
        let class_pos = pattern.find("[\\u{0041}]").unwrap();
        assert!(frag_pos < class_pos);
    }

    #[test]
    fn test_longer_fragment_before_prefix() {
        let mut set = PatternSet::new();
        set.add(&[0x1F468, 0x200D]);
        set.add(&[0x1F468, 0x200D, 0x2695]);
        let pattern = set.finalize();
        let long = fragment(&[0x1F468, 0x200D, 0x2695]);
        let short = fragment(&[0x1F468, 0x200D]);
        // Reverse lexical order puts the longer sequence before its prefix
        assert!(pattern.starts_with(&format!("(?:{}|{}", long, short)));
    }

    #[test]
    fn test_empty_codepoint_list_ignored() {
        let mut set = PatternSet::new();
        set.add(&[]);
        assert!(set.is_empty());
    }
}
