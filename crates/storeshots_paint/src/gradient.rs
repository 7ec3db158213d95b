//! Gradient backdrops
//!
//! Every generated image starts from the same kind of background: a
//! vertical multi-stop gradient with a few soft white highlights layered on
//! top.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::primitives::{Circle, Point};
use image::RgbaImage;
use smallvec::SmallVec;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A top-to-bottom gradient sampled once per scanline
#[derive(Clone, Debug)]
pub struct VerticalGradient {
    stops: SmallVec<[GradientStop; 4]>,
}

impl VerticalGradient {
    /// Build from stops sorted by offset. Needs at least one stop.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            stops: stops.into_iter().collect(),
        }
    }

    /// Three stops: `top` at 0, `mid` at `split`, `bottom` at 1
    pub fn three_stop(top: Color, mid: Color, bottom: Color, split: f32) -> Self {
        Self::new([
            GradientStop::new(0.0, top),
            GradientStop::new(split, mid),
            GradientStop::new(1.0, bottom),
        ])
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at normalized position `p` (0.0 = top, 1.0 = bottom).
    ///
    /// Segments are half-open: a position exactly on an inner stop belongs
    /// to the segment that starts there.
    pub fn sample(&self, p: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::BLACK;
        };
        if p < first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p < b.offset {
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (p - a.offset) / span } else { 0.0 };
                return a.color.lerp(b.color, local);
            }
        }
        // p at or past the last stop: finish the final segment
        match self.stops.len() {
            1 => first.color,
            n => {
                let (a, b) = (self.stops[n - 2], self.stops[n - 1]);
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (p - a.offset) / span } else { 1.0 };
                a.color.lerp(b.color, local)
            }
        }
    }
}

/// A translucent circular highlight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub circle: Circle,
    pub color: Color,
}

impl Highlight {
    /// The stock highlight walk: four white discs with radii 240, 360, 500
    /// and 700 px, alpha 28, 23, 18, 13 (never below 8), centers stepping
    /// diagonally from (20%, 18%) in increments of (20%, 14%).
    pub fn diagonal_walk(width: u32, height: u32) -> Vec<Highlight> {
        [240, 360, 500, 700]
            .into_iter()
            .enumerate()
            .map(|(i, radius)| {
                let alpha = (28 - i as i32 * 5).max(8) as u8;
                let cx = (width as f64 * (0.2 + 0.2 * i as f64)) as i32;
                let cy = (height as f64 * (0.18 + 0.14 * i as f64)) as i32;
                Highlight {
                    circle: Circle::new(Point::new(cx, cy), radius),
                    color: Color::WHITE.with_alpha(alpha),
                }
            })
            .collect()
    }
}

/// A full background description
#[derive(Clone, Debug)]
pub struct Backdrop {
    pub gradient: VerticalGradient,
    pub highlights: Vec<Highlight>,
}

/// Render a backdrop of exactly `width` x `height` pixels.
///
/// Scanlines are filled from the gradient at `y / max(1, height - 1)`. The
/// highlights are drawn into one transparent overlay, where a later disc
/// replaces an earlier one, and the overlay is then composited over the
/// gradient. The result is opaque and depends only on the inputs.
pub fn render_backdrop(width: u32, height: u32, backdrop: &Backdrop) -> Canvas {
    let first = backdrop
        .gradient
        .stops()
        .first()
        .map_or(Color::BLACK, |s| s.color);
    let mut canvas = Canvas::new(width, height, first);

    let denom = height.saturating_sub(1).max(1) as f32;
    for y in 0..height {
        let color = backdrop.gradient.sample(y as f32 / denom);
        canvas.draw_hline(y as i32, color);
    }

    if !backdrop.highlights.is_empty() {
        let overlay = highlight_overlay(width, height, &backdrop.highlights);
        canvas.composite(&overlay, Point::ZERO);
    }

    tracing::trace!(
        "rendered backdrop {}x{} with {} highlights",
        width,
        height,
        backdrop.highlights.len()
    );
    canvas
}

fn highlight_overlay(width: u32, height: u32, highlights: &[Highlight]) -> RgbaImage {
    let mut overlay = RgbaImage::new(width, height);
    for highlight in highlights {
        let shape = crate::primitives::Ellipse::new(highlight.circle.bounds());
        let area = shape.bounds.clip_to(width, height);
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                if shape.covers(x, y) {
                    overlay.put_pixel(x as u32, y as u32, image::Rgba(highlight.color.to_rgba8()));
                }
            }
        }
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Color = Color::rgb(4, 25, 46);
    const MID: Color = Color::rgb(10, 51, 84);
    const BOTTOM: Color = Color::rgb(17, 109, 119);

    fn backdrop(width: u32, height: u32) -> Backdrop {
        Backdrop {
            gradient: VerticalGradient::three_stop(TOP, MID, BOTTOM, 0.58),
            highlights: Highlight::diagonal_walk(width, height),
        }
    }

    #[test]
    fn test_sample_endpoints() {
        let g = VerticalGradient::three_stop(TOP, MID, BOTTOM, 0.58);
        assert_eq!(g.sample(0.0), TOP);
        assert_eq!(g.sample(0.58), MID);
        assert_eq!(g.sample(1.0), BOTTOM);
    }

    #[test]
    fn test_sample_midpoint_of_first_segment() {
        let g = VerticalGradient::three_stop(TOP, MID, BOTTOM, 0.58);
        assert_eq!(g.sample(0.29), TOP.lerp(MID, 0.5));
    }

    #[test]
    fn test_highlight_walk_constants() {
        let walk = Highlight::diagonal_walk(1000, 1000);
        let radii: Vec<i32> = walk.iter().map(|h| h.circle.radius).collect();
        let alphas: Vec<u8> = walk.iter().map(|h| h.color.a).collect();
        assert_eq!(radii, vec![240, 360, 500, 700]);
        assert_eq!(alphas, vec![28, 23, 18, 13]);
        assert_eq!(walk[0].circle.center, Point::new(200, 180));
        assert_eq!(walk[3].circle.center, Point::new(800, 600));
    }

    #[test]
    fn test_backdrop_dimensions() {
        for (w, h) in [(512, 512), (1024, 500), (1080, 1920), (1920, 1200), (1, 1)] {
            let canvas = render_backdrop(w, h, &backdrop(w, h));
            assert_eq!((canvas.width(), canvas.height()), (w, h));
        }
    }

    #[test]
    fn test_backdrop_is_deterministic() {
        let a = render_backdrop(300, 200, &backdrop(300, 200));
        let b = render_backdrop(300, 200, &backdrop(300, 200));
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
    }

    #[test]
    fn test_gradient_rows_without_highlights() {
        let plain = Backdrop {
            gradient: VerticalGradient::three_stop(TOP, MID, BOTTOM, 0.58),
            highlights: Vec::new(),
        };
        let canvas = render_backdrop(8, 101, &plain);
        assert_eq!(canvas.pixel(0, 0), Some(TOP.to_rgb8()));
        assert_eq!(canvas.pixel(7, 100), Some(BOTTOM.to_rgb8()));
    }

    #[test]
    fn test_highlight_brightens_background() {
        let plain = Backdrop {
            gradient: VerticalGradient::three_stop(TOP, MID, BOTTOM, 0.58),
            highlights: Vec::new(),
        };
        let lit = render_backdrop(400, 400, &backdrop(400, 400));
        let dark = render_backdrop(400, 400, &plain);
        // (80, 72) is the first highlight center
        let a = lit.pixel(80, 72).unwrap_or_default();
        let b = dark.pixel(80, 72).unwrap_or_default();
        assert!(a[0] > b[0] && a[1] > b[1] && a[2] > b[2]);
    }
}
