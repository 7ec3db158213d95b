//! Glyph rasterization using swash
//!
//! Converts glyph outlines to 8-bit coverage masks. Rendered glyphs are kept
//! in an LRU cache keyed by face, glyph and pixel size, since the same few
//! strings are drawn onto every screenshot.

use crate::font::FontFace;
use crate::{Result, TextError};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

/// Maximum number of cached glyph bitmaps
const GLYPH_CACHE_CAPACITY: usize = 2048;

/// Rasterized glyph coverage mask with placement
#[derive(Debug, Clone, Default)]
pub struct RasterizedGlyph {
    /// Row-major 8-bit coverage
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the left edge
    pub bearing_x: i32,
    /// Offset from the baseline up to the top edge
    pub bearing_y: i32,
}

impl RasterizedGlyph {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// (face id, glyph id, pixel size in 1/64 px)
type GlyphKey = (u32, u16, u32);

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    /// Swash scale context (caches scaling state)
    scale_context: ScaleContext,
    cache: LruCache<GlyphKey, Arc<RasterizedGlyph>>,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(GLYPH_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            scale_context: ScaleContext::new(),
            cache: LruCache::new(capacity),
        }
    }

    /// Number of cached glyphs
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Rasterize a glyph at the given font size, reusing a cached bitmap
    /// when one exists
    pub fn rasterize(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<Arc<RasterizedGlyph>> {
        let key = (font.id(), glyph_id, (font_size * 64.0).round() as u32);
        // LruCache::get promotes to most-recently-used
        if let Some(glyph) = self.cache.get(&key) {
            return Ok(Arc::clone(glyph));
        }

        let glyph = Arc::new(self.render(font, glyph_id, font_size)?);
        self.cache.put(key, Arc::clone(&glyph));
        Ok(glyph)
    }

    fn render(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<RasterizedGlyph> {
        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font_size)
            .hint(false)
            .build();

        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        // Glyphs without an outline (spaces) render to nothing
        let Some(image) = render.render(&mut scaler, glyph_id) else {
            return Ok(RasterizedGlyph::default());
        };

        Ok(RasterizedGlyph {
            bitmap: image.data,
            width: image.placement.width,
            height: image.placement.height,
            bearing_x: image.placement.left,
            bearing_y: image.placement.top,
        })
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{FontResolver, FontWeight};
    use crate::Font;

    #[test]
    fn test_rasterizer_creation() {
        let rasterizer = GlyphRasterizer::new();
        assert_eq!(rasterizer.cached(), 0);
    }

    #[test]
    fn test_glyphs_are_cached() {
        let mut resolver = FontResolver::new();
        let Font::Outline { face, size } = resolver.resolve(24, FontWeight::Regular).font else {
            println!("No outline fonts available - skipping test (CI environment)");
            return;
        };
        let Some(id) = face.glyph_id('A') else {
            return;
        };

        let mut rasterizer = GlyphRasterizer::new();
        let first = rasterizer.rasterize(&face, id, size).unwrap();
        let second = rasterizer.rasterize(&face, id, size).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(rasterizer.cached(), 1);
        assert!(!first.is_empty());
        assert_eq!(first.bitmap.len(), (first.width * first.height) as usize);
    }
}
