//! emojigen - emoji glyph image and regex generator
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Font Locator (collection → single)      │
//! ├──────────────────────────────────────────┤
//! │  Sequence Enumerator → Glyph Resolver    │
//! │                 ↓ accepted               │
//! │  Image Writer      Pattern Accumulator   │
//! │       ↓                    ↓             │
//! │  images/*.png       emoji_pattern.rs     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! One-shot offline tool: opens the system color emoji font, finds every
//! codepoint sequence it renders as a single glyph, dumps each glyph's
//! embedded bitmap as a PNG file and emits a generated source file with a
//! pattern matching all supported sequences.

mod config;
mod constants;
mod font;
mod generate;

use anyhow::Result;
use log::{info, warn};

const USAGE: &str = "\
emojigen - extract glyph images and a matching regex from a color emoji font

USAGE:
    emojigen

OPTIONS:
    -h, --help       Print this help message
    -V, --version    Print version information

Font paths, output locations and the modifier list are read from
~/.config/emojigen/config.toml when present; built-in defaults target
the macOS system emoji font.
";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", USAGE);
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("emojigen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config::Config::load();

    let emoji_font = match font::EmojiFont::locate(&config.font) {
        Ok(f) => f,
        Err(font::FontError::NotFound) => {
            // Degraded completion, not an error: nothing to generate
            warn!("Could not find the emoji font; no images or pattern generated");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let summary = generate::run(&emoji_font, &config)?;
    info!(
        "Done: {} sequences accepted, {} images written",
        summary.sequences_accepted, summary.images_written
    );
    Ok(())
}
