//! Candidate sequence enumeration
//!
//! Produces every codepoint sequence worth testing against the font:
//! all ordered regional-indicator pairs (country flags), and for each
//! codepoint in the font's character set its combinations with the
//! configured modifiers and the female joiner.
//!
//! A candidate is just a guess. Most of them do not lay out to a single
//! glyph and are discarded by the resolver.

use crate::config::ModifierConfig;
use crate::constants::{REGIONAL_INDICATOR_RANGE_END, REGIONAL_INDICATOR_RANGE_START};

/// A codepoint sequence to test for single-glyph representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Concatenated codepoint string handed to the layout operation
    pub text: String,
}

impl Candidate {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// The originating codepoint list, used for file naming and the pattern
    pub fn codepoints(&self) -> Vec<u32> {
        self.text.chars().map(|c| c as u32).collect()
    }
}

/// All ordered pairs of the 26 regional indicator symbol letters
pub fn flag_pairs() -> Vec<Candidate> {
    let letters: Vec<char> = (REGIONAL_INDICATOR_RANGE_START..=REGIONAL_INDICATOR_RANGE_END)
        .filter_map(char::from_u32)
        .collect();

    let mut out = Vec::with_capacity(letters.len() * letters.len());
    for &first in &letters {
        for &second in &letters {
            out.push(Candidate::new(format!("{}{}", first, second)));
        }
    }
    out
}

/// Candidates for one base codepoint, in test order:
/// base+modifier+female and base+modifier for each configured modifier,
/// then base+female, then the base codepoint alone
pub fn codepoint_candidates(base: char, modifiers: &ModifierConfig) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(modifiers.modifiers.len() * 2 + 2);
    for modifier in &modifiers.modifiers {
        out.push(Candidate::new(format!(
            "{}{}{}",
            base, modifier, modifiers.female_joiner
        )));
        out.push(Candidate::new(format!("{}{}", base, modifier)));
    }
    out.push(Candidate::new(format!(
        "{}{}",
        base, modifiers.female_joiner
    )));
    out.push(Candidate::new(base.to_string()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_pair_count() {
        let pairs = flag_pairs();
        assert_eq!(pairs.len(), 26 * 26);
        assert_eq!(pairs[0].text, "\u{1F1E6}\u{1F1E6}");
        assert_eq!(pairs[26 * 26 - 1].text, "\u{1F1FF}\u{1F1FF}");
    }

    #[test]
    fn test_flag_pair_codepoints() {
        // 🇫🇷
        let fr = Candidate::new("\u{1F1EB}\u{1F1F7}".to_string());
        assert_eq!(fr.codepoints(), vec![0x1F1EB, 0x1F1F7]);
    }

    #[test]
    fn test_codepoint_candidate_order() {
        let modifiers = ModifierConfig::default();
        let candidates = codepoint_candidates('#', &modifiers);

        // Two candidates per modifier, plus female-alone, plus bare
        assert_eq!(candidates.len(), 7 * 2 + 2);

        // First modifier is tested with the female joiner before without it
        assert_eq!(candidates[0].text, "#\u{20E0}\u{200D}\u{2640}");
        assert_eq!(candidates[1].text, "#\u{20E0}");

        // Female-alone and the bare codepoint come last
        assert_eq!(
            candidates[candidates.len() - 2].text,
            "#\u{200D}\u{2640}"
        );
        assert_eq!(candidates[candidates.len() - 1].text, "#");
    }

    #[test]
    fn test_astral_base() {
        let modifiers = ModifierConfig::default();
        let candidates = codepoint_candidates('\u{1F469}', &modifiers);
        let last = &candidates[candidates.len() - 1];
        assert_eq!(last.codepoints(), vec![0x1F469]);
    }
}
