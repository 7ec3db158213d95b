//! Drawing text onto a canvas
//!
//! `TextPainter` owns the font resolver and the glyph cache for a run, so
//! every composer that draws text shares one set of loaded faces.

use crate::font::Font;
use crate::layout::{wrap_text, LayoutOptions};
use crate::rasterizer::GlyphRasterizer;
use crate::resolver::{FontResolver, FontWeight, ResolvedFont};
use storeshots_paint::{Canvas, Color, Point};

pub struct TextPainter {
    resolver: FontResolver,
    rasterizer: GlyphRasterizer,
}

impl TextPainter {
    pub fn new(resolver: FontResolver) -> Self {
        Self {
            resolver,
            rasterizer: GlyphRasterizer::new(),
        }
    }

    /// Resolve a font, keeping the record of where it came from
    pub fn resolve(&mut self, size: u32, weight: FontWeight) -> ResolvedFont {
        self.resolver.resolve(size, weight)
    }

    /// Shorthand for [`TextPainter::resolve`] when only the font matters
    pub fn font(&mut self, size: u32, weight: FontWeight) -> Font {
        self.resolve(size, weight).font
    }

    /// Draw one line with the top of its line box at `at`
    pub fn draw_text(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &Font,
        fill: Color,
        at: Point,
    ) {
        match font {
            Font::Builtin(bitmap) => bitmap.draw(canvas, at.x, at.y, text, fill),
            Font::Outline { face, size } => {
                let baseline = at.y + font.ascent().round() as i32;
                let (glyphs, _) = face.place_glyphs(text, *size);
                for placed in glyphs {
                    let glyph = match self.rasterizer.rasterize(face, placed.glyph_id, *size) {
                        Ok(glyph) => glyph,
                        Err(e) => {
                            tracing::warn!("Failed to rasterize glyph {}: {}", placed.glyph_id, e);
                            continue;
                        }
                    };
                    if glyph.is_empty() {
                        continue;
                    }
                    let origin = Point::new(
                        at.x + placed.x.round() as i32 + glyph.bearing_x,
                        baseline - glyph.bearing_y,
                    );
                    canvas.draw_mask(&glyph.bitmap, glyph.width, origin, fill);
                }
            }
        }
    }

    /// Draw one line centered on `center`, horizontally on its advance and
    /// vertically on its line box
    pub fn draw_text_centered(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &Font,
        fill: Color,
        center: Point,
    ) {
        let extent = font.measure(text);
        let top_left = Point::new(
            center.x - (extent.width as f32 / 2.0).round() as i32,
            center.y - (font.line_box() / 2.0).round() as i32,
        );
        self.draw_text(canvas, text, font, fill, top_left);
    }

    /// Wrap `text` per `options` and draw the lines left-aligned from `at`.
    ///
    /// Each line advances the cursor by its measured height plus the line
    /// spacing. Returns the cursor below the last line, or `at.y` when there
    /// is nothing to draw.
    pub fn draw_wrapped(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &Font,
        fill: Color,
        at: Point,
        options: &LayoutOptions,
    ) -> i32 {
        let wrapped = wrap_text(text, font, options.max_width, options.max_lines);
        if wrapped.truncated {
            tracing::trace!("truncated {:?} to {} lines", text, wrapped.lines.len());
        }

        let mut cursor = at.y;
        for line in &wrapped.lines {
            self.draw_text(canvas, line, font, fill, Point::new(at.x, cursor));
            cursor += font.measure(line).height as i32 + options.line_spacing;
        }
        cursor
    }
}

impl Default for TextPainter {
    fn default() -> Self {
        Self::new(FontResolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::BuiltinFont;
    use crate::resolver::FontCandidate;

    fn offline_painter() -> TextPainter {
        TextPainter::new(
            FontResolver::with_candidates(vec![FontCandidate::regular("/nonexistent.ttf")])
                .system_fallback(false),
        )
    }

    fn inked(canvas: &Canvas) -> usize {
        canvas
            .as_image()
            .pixels()
            .filter(|p| p.0 != [0, 0, 0])
            .count()
    }

    #[test]
    fn test_offline_painter_uses_builtin_font() {
        let mut painter = offline_painter();
        assert!(painter.font(40, FontWeight::Regular).is_builtin());
    }

    #[test]
    fn test_draw_wrapped_empty_text_returns_start() {
        let mut painter = offline_painter();
        let mut canvas = Canvas::new(50, 50, Color::BLACK);
        let font = Font::builtin();
        let y = painter.draw_wrapped(
            &mut canvas,
            "   ",
            &font,
            Color::WHITE,
            Point::new(4, 17),
            &LayoutOptions::new(40),
        );
        assert_eq!(y, 17);
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn test_draw_wrapped_advances_cursor() {
        let mut painter = offline_painter();
        let mut canvas = Canvas::new(200, 100, Color::BLACK);
        let font = Font::builtin();
        let options = LayoutOptions::new(7 * BuiltinFont::ADVANCE as i32)
            .line_spacing(4)
            .max_lines(2);
        // Two lines kept; neither has descenders, so each is 7 px tall
        let y = painter.draw_wrapped(
            &mut canvas,
            "one two three four",
            &font,
            Color::WHITE,
            Point::new(0, 10),
            &options,
        );
        assert_eq!(y, 10 + 2 * (7 + 4));
        assert!(inked(&canvas) > 0);
    }

    #[test]
    fn test_draw_text_centered_builtin() {
        let mut painter = offline_painter();
        let mut canvas = Canvas::new(40, 40, Color::BLACK);
        let font = Font::builtin();
        painter.draw_text_centered(&mut canvas, "I", &font, Color::WHITE, Point::new(20, 20));
        // "I" is 6 px wide, so it starts at x = 17 and its stem is at x = 19
        assert_eq!(canvas.pixel(19, 18), Some([255, 255, 255]));
    }

    #[test]
    fn test_draw_text_with_outline_font() {
        let mut painter = TextPainter::default();
        let font = painter.font(32, FontWeight::Bold);
        if font.is_builtin() {
            println!("No outline fonts available - skipping test (CI environment)");
            return;
        }
        let mut canvas = Canvas::new(300, 60, Color::BLACK);
        painter.draw_text(&mut canvas, "Events", &font, Color::WHITE, Point::new(4, 4));
        assert!(inked(&canvas) > 0);
    }
}
