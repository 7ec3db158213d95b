//! Font faces and sized font handles

use crate::bitmap::BuiltinFont;
use crate::{Result, TextError};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use ttf_parser::GlyphId;

static NEXT_FACE_ID: AtomicU32 = AtomicU32::new(1);

/// Vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
}

impl FontMetrics {
    /// Font units to pixels at `size` px per em
    pub fn scale(&self, size: f32) -> f32 {
        size / self.units_per_em.max(1) as f32
    }

    pub fn ascender_px(&self, size: f32) -> f32 {
        self.ascender as f32 * self.scale(size)
    }

    /// Typically negative
    pub fn descender_px(&self, size: f32) -> f32 {
        self.descender as f32 * self.scale(size)
    }
}

/// Measured extent of a single line of text in whole pixels.
///
/// `width` is the pen advance; `height` runs from the top of the line box
/// down to the lowest inked pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// A glyph placed on a single line, `x` relative to the line start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub glyph_id: u16,
    pub x: f32,
}

/// A parsed font file kept in memory
pub struct FontFace {
    id: u32,
    data: Vec<u8>,
    face_index: u32,
    family: String,
    metrics: FontMetrics,
}

impl FontFace {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
        })?;
        Self::from_data_with_index(data, 0)
    }

    pub fn from_data_with_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let (family, metrics) = {
            let face = ttf_parser::Face::parse(&data, face_index)
                .map_err(|e| TextError::FontParseError(e.to_string()))?;

            let family = face
                .names()
                .into_iter()
                .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
                .find_map(|name| name.to_string())
                .unwrap_or_default();

            let metrics = FontMetrics {
                units_per_em: face.units_per_em(),
                ascender: face.ascender(),
                descender: face.descender(),
                line_gap: face.line_gap(),
            };
            (family, metrics)
        };

        if metrics.units_per_em == 0 {
            return Err(TextError::InvalidFontData);
        }

        Ok(Self {
            id: NEXT_FACE_ID.fetch_add(1, Ordering::Relaxed),
            data,
            face_index,
            family,
            metrics,
        })
    }

    /// Process-unique id, used as a glyph cache key
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn parse(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.face_index).ok()
    }

    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.parse()?.glyph_index(c).map(|id| id.0)
    }

    /// Lay `text` out on one line, returning the glyphs and the total
    /// advance in pixels. Unmapped characters use the `.notdef` glyph.
    pub fn place_glyphs(&self, text: &str, size: f32) -> (Vec<PlacedGlyph>, f32) {
        let Some(face) = self.parse() else {
            return (Vec::new(), 0.0);
        };
        let scale = self.metrics.scale(size);
        let mut pen = 0.0f32;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = face.glyph_index(c).unwrap_or(GlyphId(0));
            glyphs.push(PlacedGlyph {
                glyph_id: id.0,
                x: pen,
            });
            pen += face.glyph_hor_advance(id).unwrap_or(0) as f32 * scale;
        }
        (glyphs, pen)
    }

    /// Measure one line of text at `size` px
    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        let Some(face) = self.parse() else {
            return TextExtent::default();
        };
        if text.is_empty() {
            return TextExtent::default();
        }
        let scale = self.metrics.scale(size);
        let mut advance = 0u32;
        let mut ink_bottom = 0i32;
        for c in text.chars() {
            let id = face.glyph_index(c).unwrap_or(GlyphId(0));
            advance += face.glyph_hor_advance(id).unwrap_or(0) as u32;
            if let Some(bbox) = face.glyph_bounding_box(id) {
                ink_bottom = ink_bottom.min(bbox.y_min as i32);
            }
        }
        let width = (advance as f32 * scale).ceil() as u32;
        let height = ((self.metrics.ascender as i32 - ink_bottom) as f32 * scale).ceil() as u32;
        TextExtent { width, height }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("face_index", &self.face_index)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A usable font handle: an outline face at a pixel size, or the built-in
/// bitmap font which ignores size requests.
#[derive(Debug, Clone)]
pub enum Font {
    Outline { face: Arc<FontFace>, size: f32 },
    Builtin(BuiltinFont),
}

impl Font {
    pub fn outline(face: Arc<FontFace>, size: f32) -> Self {
        Font::Outline { face, size }
    }

    pub fn builtin() -> Self {
        Font::Builtin(BuiltinFont)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    /// Effective pixel size (the built-in font reports its cell height)
    pub fn size(&self) -> f32 {
        match self {
            Font::Outline { size, .. } => *size,
            Font::Builtin(_) => BuiltinFont::CELL_HEIGHT as f32,
        }
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self) -> f32 {
        match self {
            Font::Outline { face, size } => face.metrics().ascender_px(*size),
            Font::Builtin(_) => BuiltinFont::BASELINE as f32,
        }
    }

    /// Height of the full line box (ascent plus descent)
    pub fn line_box(&self) -> f32 {
        match self {
            Font::Outline { face, size } => {
                let m = face.metrics();
                m.ascender_px(*size) - m.descender_px(*size)
            }
            Font::Builtin(_) => BuiltinFont::CELL_HEIGHT as f32,
        }
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        match self {
            Font::Outline { face, size } => face.measure(text, *size),
            Font::Builtin(font) => font.measure(text),
        }
    }
}
