//! Text rendering for storeshots
//!
//! This crate provides:
//! - Font loading and parsing (TTF/OTF via ttf-parser)
//! - Font resolution over an ordered candidate list with system and
//!   built-in fallbacks
//! - Glyph rasterization (swash) with an LRU glyph cache
//! - Greedy word wrapping with line-count truncation

pub mod bitmap;
pub mod font;
pub mod layout;
pub mod painter;
pub mod rasterizer;
pub mod resolver;

pub use bitmap::BuiltinFont;
pub use font::{Font, FontFace, FontMetrics, TextExtent};
pub use layout::{wrap_text, LayoutOptions, WrappedText, ELLIPSIS};
pub use painter::TextPainter;
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use resolver::{
    builtin_candidates, FontCandidate, FontResolver, FontSource, FontWeight, ResolvedFont,
};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
