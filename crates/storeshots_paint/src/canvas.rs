//! Canvas - the main drawing API
//!
//! A `Canvas` owns an opaque RGB pixel buffer. Every primitive composites
//! its color source-over the existing pixels, so translucent colors blend
//! with what is already drawn while opaque colors simply replace it.

use crate::color::Color;
use crate::primitives::*;
use image::{RgbImage, RgbaImage};

/// Outline style for shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1,
        }
    }
}

/// Fill and outline for a closed shape.
///
/// The outline is painted inside the shape bounds; the fill covers what the
/// outline leaves uncovered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl ShapeStyle {
    pub fn filled(color: impl Into<Color>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<Color>, width: u32) -> Self {
        self.stroke = Some(StrokeStyle {
            color: color.into(),
            width,
        });
        self
    }
}

/// An opaque raster surface created fresh for each artifact
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a solid background
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, image::Rgb(background.to_rgb8())),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Borrow the underlying pixel buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Take ownership of the underlying pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.pixels
    }

    /// Composite `color` at a single pixel, scaled by `coverage` (255 = full).
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let px = self.pixels.get_pixel_mut(x as u32, y as u32);
        px.0 = color.over(px.0, coverage);
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let area = rect.clip_to(self.width(), self.height());
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                self.blend_pixel(x, y, color, 255);
            }
        }
    }

    /// Paint one full-width scanline
    pub fn draw_hline(&mut self, y: i32, color: Color) {
        let width = self.width() as i32;
        self.fill_rect(Rect::from_corners(0, y, width - 1, y), color);
    }

    pub fn draw_rounded_rect(&mut self, shape: RoundedRect, style: &ShapeStyle) {
        let inner = style
            .stroke
            .filter(|s| s.width > 0)
            .map(|s| shape.inset(s.width as i32));
        self.paint_region(shape.rect, style, |x, y| {
            (shape.covers(x, y), inner.map_or(true, |i| i.covers(x, y)))
        });
    }

    pub fn draw_ellipse(&mut self, shape: Ellipse, style: &ShapeStyle) {
        let inner = style
            .stroke
            .filter(|s| s.width > 0)
            .map(|s| Ellipse::new(shape.bounds.inset(s.width as i32)));
        self.paint_region(shape.bounds, style, |x, y| {
            (shape.covers(x, y), inner.map_or(true, |i| i.covers(x, y)))
        });
    }

    pub fn fill_ellipse(&mut self, shape: Ellipse, color: Color) {
        self.draw_ellipse(shape, &ShapeStyle::filled(color));
    }

    /// Paint every pixel of `bounds` by classifying it as outside, outline
    /// ring, or interior. `classify` returns `(in_outer, in_inner)`.
    fn paint_region(
        &mut self,
        bounds: Rect,
        style: &ShapeStyle,
        classify: impl Fn(i32, i32) -> (bool, bool),
    ) {
        let area = bounds.clip_to(self.width(), self.height());
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                let (outer, inner) = classify(x, y);
                if !outer {
                    continue;
                }
                let color = if inner {
                    style.fill
                } else {
                    style.stroke.map(|s| s.color).or(style.fill)
                };
                if let Some(color) = color {
                    self.blend_pixel(x, y, color, 255);
                }
            }
        }
    }

    // === Compositing ===

    /// Composite an RGBA image with its top-left corner at `at`, using the
    /// image's own alpha channel.
    pub fn composite(&mut self, source: &RgbaImage, at: Point) {
        for (sx, sy, px) in source.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                continue;
            }
            self.blend_pixel(at.x + sx as i32, at.y + sy as i32, Color::rgba(r, g, b, a), 255);
        }
    }

    /// Composite an 8-bit coverage mask tinted with `color`.
    ///
    /// `mask` is row-major with `width` columns; its top-left corner lands
    /// at `at`.
    pub fn draw_mask(&mut self, mask: &[u8], width: u32, at: Point, color: Color) {
        if width == 0 {
            return;
        }
        for (i, &coverage) in mask.iter().enumerate() {
            if coverage == 0 {
                continue;
            }
            let x = at.x + (i as u32 % width) as i32;
            let y = at.y + (i as u32 / width) as i32;
            self.blend_pixel(x, y, color, coverage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(10, 20, 30);

    #[test]
    fn test_new_canvas_dimensions() {
        let canvas = Canvas::new(64, 32, BG);
        assert_eq!(canvas.size(), Size::new(64, 32));
        assert_eq!(canvas.pixel(63, 31), Some([10, 20, 30]));
        assert_eq!(canvas.pixel(64, 0), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.fill_rect(Rect::from_corners(-5, -5, 2, 2), Color::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([10, 20, 30]));
    }

    #[test]
    fn test_rounded_rect_outline_and_fill() {
        let mut canvas = Canvas::new(100, 100, BG);
        let style = ShapeStyle::filled((1, 2, 3)).with_stroke((200, 200, 200), 3);
        canvas.draw_rounded_rect(
            RoundedRect::new(Rect::from_corners(10, 10, 89, 89), 16.0),
            &style,
        );
        // Cut corner stays background
        assert_eq!(canvas.pixel(10, 10), Some([10, 20, 30]));
        // Top edge is outline
        assert_eq!(canvas.pixel(50, 10), Some([200, 200, 200]));
        assert_eq!(canvas.pixel(50, 12), Some([200, 200, 200]));
        // Interior is fill
        assert_eq!(canvas.pixel(50, 13), Some([1, 2, 3]));
        assert_eq!(canvas.pixel(50, 50), Some([1, 2, 3]));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.fill_rect(Rect::from_corners(0, 0, 3, 3), Color::WHITE.with_alpha(128));
        assert_eq!(canvas.pixel(1, 1), Some([128, 128, 128]));
    }

    #[test]
    fn test_composite_respects_alpha() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        let mut src = RgbaImage::new(2, 2);
        src.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        src.put_pixel(1, 1, image::Rgba([0, 255, 0, 0]));
        canvas.composite(&src, Point::new(1, 1));
        assert_eq!(canvas.pixel(1, 1), Some([255, 0, 0]));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0]));
    }

    #[test]
    fn test_draw_mask() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        let mask = [255, 0, 0, 255];
        canvas.draw_mask(&mask, 2, Point::new(2, 2), Color::WHITE);
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(3, 2), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), Some([255, 255, 255]));
    }
}
