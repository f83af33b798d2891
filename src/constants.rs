//! Global constants for emojigen
//!
//! Consolidates Unicode range constants and built-in generation defaults
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Unicode Ranges and Markers
// ============================================================================

/// Regional indicator symbol letters range (U+1F1E6 - U+1F1FF)
/// Rendered in pairs as country flag emoji
pub const REGIONAL_INDICATOR_RANGE_START: u32 = 0x1F1E6;
pub const REGIONAL_INDICATOR_RANGE_END: u32 = 0x1F1FF;

/// Generic variation selectors range (U+FE00 - U+FE0D)
/// VS1 through VS14, allowed as an optional suffix after a match
pub const VARIATION_SELECTOR_RANGE_START: u32 = 0xFE00;
pub const VARIATION_SELECTOR_RANGE_END: u32 = 0xFE0D;

/// Variation Selector-16 (emoji presentation request)
pub const VS_EMOJI: u32 = 0xFE0F;

/// Variation Selector-15 (text presentation request)
/// The generated pattern rejects sequences followed by this
pub const VS_TEXT: u32 = 0xFE0E;

/// Zero Width Joiner
pub const ZWJ: char = '\u{200D}';

/// Female sign, joined after a ZWJ to request the female glyph variant
pub const FEMALE_SIGN: char = '\u{2640}';

// ============================================================================
// Generation Defaults
// ============================================================================

/// Default combining modifiers tested against every codepoint:
/// enclosing circle backslash, combining enclosing keycap, and
/// the five skin tone modifiers
pub const DEFAULT_MODIFIERS: &[&str] = &[
    "\u{20E0}",
    "\u{20E3}",
    "\u{1F3FB}",
    "\u{1F3FC}",
    "\u{1F3FD}",
    "\u{1F3FE}",
    "\u{1F3FF}",
];

/// System emoji font collection path (macOS >= 10.12)
pub const DEFAULT_COLLECTION_PATH: &str = "/System/Library/Fonts/Apple Color Emoji.ttc";

/// System emoji font single-font path (macOS <= 10.11)
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Apple Color Emoji.ttf";

/// Target glyph image size in pixels
pub const DEFAULT_GLYPH_SIZE: u16 = 64;

/// Default output directory for extracted glyph images
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Default path of the generated pattern source file
pub const DEFAULT_PATTERN_FILE: &str = "emoji_pattern.rs";
