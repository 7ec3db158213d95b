//! Device screenshots
//!
//! Every screenshot has the same structure at any size: a header card with
//! the brand label, a "Screen NN" badge, the title and subtitle; a stack of
//! numbered bullet cards; and a call-to-action card pinned to the bottom.
//! All geometry scales with the shorter side of the device, except the
//! header and card heights, which scale with the height and grow in
//! landscape.

use storeshots_paint::{
    render_backdrop, Canvas, Color, Ellipse, Point, Rect, RoundedRect, ShapeStyle, Size,
};
use storeshots_text::{FontWeight, LayoutOptions, TextPainter};

use super::scaled;
use crate::palette::{
    brand_backdrop, ACCENT_GOLD, ACCENT_GREEN, CARD_BORDER, TEXT_LIGHT, TEXT_MUTED,
};
use crate::screens::ScreenSpec;

/// Brand label drawn in the header card
pub const BRAND_LABEL: &str = "Events";

/// Vertical room kept free above the CTA card; a bullet card reaching into
/// it stops the stack
const CTA_CLEARANCE: i32 = 170;

const HEADER_FILL: Color = Color::rgb(7, 38, 61);
const CARD_FILLS: [Color; 2] = [Color::rgb(8, 34, 55), Color::rgb(10, 42, 67)];
const CARD_OUTLINE: Color = Color::rgb(111, 165, 194);
const BADGE_TEXT: Color = Color::rgb(1, 27, 42);
const CTA_OUTLINE: Color = Color::rgb(220, 250, 241);
const CTA_TEXT: Color = Color::rgb(8, 34, 52);

/// Size-derived geometry and font sizes for one device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotLayout {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
    pub header_height: i32,
    pub body_top: i32,
    pub card_height: i32,
    pub card_gap: i32,
    pub cta_height: i32,
    pub title_px: u32,
    pub subtitle_px: u32,
    pub section_px: u32,
    pub body_px: u32,
    pub cta_px: u32,
    pub small_px: u32,
}

impl ScreenshotLayout {
    pub fn for_size(size: Size) -> Self {
        let min = size.min_side();
        let landscape = size.is_landscape();
        let font_px = |factor: f64| scaled(min, factor).max(0) as u32;

        let margin = scaled(min, 0.055);
        let header_height = scaled(size.height, if landscape { 0.24 } else { 0.19 });
        Self {
            width: size.width as i32,
            height: size.height as i32,
            margin,
            header_height,
            body_top: margin + header_height + scaled(min, 0.035),
            card_height: scaled(size.height, if landscape { 0.18 } else { 0.14 }),
            card_gap: scaled(min, 0.024),
            cta_height: scaled(min, 0.12),
            title_px: font_px(0.053),
            subtitle_px: font_px(0.027),
            section_px: font_px(0.032),
            body_px: font_px(0.024),
            cta_px: font_px(0.029),
            small_px: font_px(0.021),
        }
    }

    /// Inclusive corners of bullet card `index`
    pub fn card_rect(&self, index: usize) -> Rect {
        let y0 = self.body_top + index as i32 * (self.card_height + self.card_gap);
        Rect::from_corners(self.margin, y0, self.width - self.margin, y0 + self.card_height)
    }

    /// Anchor for the middle of bullet `index`'s number, inside the upper
    /// left part of its badge
    pub fn badge_number_center(&self, index: usize) -> Point {
        Point::new(self.margin + 34, self.card_rect(index).y0 + 32)
    }

    /// Lowest y a bullet card may reach
    pub fn card_limit(&self) -> i32 {
        self.height - self.margin - CTA_CLEARANCE
    }

    /// How many of `bullets` cards fit before the stack is cut off
    pub fn bullets_that_fit(&self, bullets: usize) -> usize {
        (0..bullets)
            .take_while(|&i| self.card_rect(i).y1 <= self.card_limit())
            .count()
    }

    pub fn cta_rect(&self) -> Rect {
        let y0 = self.height - self.margin - self.cta_height;
        Rect::from_corners(self.margin, y0, self.width - self.margin, y0 + self.cta_height)
    }
}

/// A rendered screenshot plus what had to be left out
pub struct ScreenshotOutcome {
    pub canvas: Canvas,
    /// Bullets that did not fit above the CTA card
    pub dropped_bullets: usize,
}

impl ScreenshotOutcome {
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Render `spec` as screenshot number `index` (0-based) at `size`
pub fn render_screenshot(
    painter: &mut TextPainter,
    size: Size,
    spec: &ScreenSpec,
    index: usize,
) -> ScreenshotOutcome {
    let layout = ScreenshotLayout::for_size(size);
    let (w, m) = (layout.width, layout.margin);
    let mut canvas = render_backdrop(size.width, size.height, &brand_backdrop(size));

    let title_font = painter.font(layout.title_px, FontWeight::Bold);
    let subtitle_font = painter.font(layout.subtitle_px, FontWeight::Regular);
    let section_font = painter.font(layout.section_px, FontWeight::Bold);
    let body_font = painter.font(layout.body_px, FontWeight::Regular);
    let cta_font = painter.font(layout.cta_px, FontWeight::Bold);
    let small_font = painter.font(layout.small_px, FontWeight::Regular);

    // Header
    canvas.draw_rounded_rect(
        RoundedRect::new(Rect::from_corners(m, m, w - m, m + layout.header_height), 32.0),
        &ShapeStyle::filled(HEADER_FILL).with_stroke(CARD_BORDER, 3),
    );
    painter.draw_text(
        &mut canvas,
        BRAND_LABEL,
        &section_font,
        TEXT_LIGHT,
        Point::new(m + 30, m + 20),
    );

    let badge = format!("Screen {:02}", index + 1);
    let badge_width = small_font.measure(&badge).width as i32;
    painter.draw_text(
        &mut canvas,
        &badge,
        &small_font,
        ACCENT_GOLD,
        Point::new(w - m - 30 - badge_width, m + 24),
    );

    let header_text = LayoutOptions::new(w - 2 * m - 60).line_spacing(4).max_lines(2);
    painter.draw_wrapped(
        &mut canvas,
        spec.title,
        &title_font,
        TEXT_LIGHT,
        Point::new(m + 30, m + 65),
        &header_text,
    );
    painter.draw_wrapped(
        &mut canvas,
        spec.subtitle,
        &subtitle_font,
        TEXT_MUTED,
        Point::new(m + 30, m + layout.header_height - 58),
        &header_text,
    );

    // Bullet cards
    let fitting = layout.bullets_that_fit(spec.bullets.len());
    let bullet_text = LayoutOptions::new(w - 2 * m - 90).line_spacing(4).max_lines(3);
    for (i, bullet) in spec.bullets.iter().take(fitting).enumerate() {
        let card = layout.card_rect(i);
        canvas.draw_rounded_rect(
            RoundedRect::new(card, 28.0),
            &ShapeStyle::filled(CARD_FILLS[i % 2]).with_stroke(CARD_OUTLINE, 2),
        );

        let badge = Ellipse::new(Rect::from_corners(m + 22, card.y0 + 26, m + 56, card.y0 + 60));
        canvas.fill_ellipse(badge, ACCENT_GREEN);
        painter.draw_text_centered(
            &mut canvas,
            &(i + 1).to_string(),
            &small_font,
            BADGE_TEXT,
            layout.badge_number_center(i),
        );

        painter.draw_wrapped(
            &mut canvas,
            bullet,
            &body_font,
            TEXT_LIGHT,
            Point::new(m + 72, card.y0 + 26),
            &bullet_text,
        );
    }

    let dropped_bullets = spec.bullets.len() - fitting;
    if dropped_bullets > 0 {
        tracing::warn!(
            "screen {:02} ({}) at {}x{}: {} bullet(s) did not fit",
            index + 1,
            spec.slug,
            size.width,
            size.height,
            dropped_bullets
        );
    }

    // Call to action
    let cta = layout.cta_rect();
    canvas.draw_rounded_rect(
        RoundedRect::new(cta, 30.0),
        &ShapeStyle::filled(ACCENT_GREEN).with_stroke(CTA_OUTLINE, 2),
    );
    painter.draw_wrapped(
        &mut canvas,
        spec.cta,
        &cta_font,
        CTA_TEXT,
        Point::new(m + 26, cta.y0 + (layout.cta_height as f64 * 0.3) as i32),
        &LayoutOptions::new(w - 2 * m - 52).line_spacing(3).max_lines(2),
    );

    ScreenshotOutcome {
        canvas,
        dropped_bullets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PHONE_SIZE, TABLET_10_SIZE, TABLET_7_SIZE};
    use crate::screens::SCREENS;
    use storeshots_text::{FontCandidate, FontResolver};

    fn offline_painter() -> TextPainter {
        TextPainter::new(
            FontResolver::with_candidates(vec![FontCandidate::regular("/nonexistent.ttf")])
                .system_fallback(false),
        )
    }

    #[test]
    fn test_phone_layout_constants() {
        let layout = ScreenshotLayout::for_size(PHONE_SIZE);
        assert_eq!(layout.margin, 59);
        assert_eq!(layout.header_height, 364);
        assert_eq!(layout.body_top, 460);
        assert_eq!(layout.card_height, 268);
        assert_eq!(layout.card_gap, 25);
        assert_eq!(layout.cta_height, 129);
        assert_eq!(layout.title_px, 57);
        assert_eq!(layout.small_px, 22);
    }

    #[test]
    fn test_landscape_layout_constants() {
        let layout = ScreenshotLayout::for_size(TABLET_10_SIZE);
        assert_eq!(layout.margin, 66);
        assert_eq!(layout.header_height, 288);
        assert_eq!(layout.body_top, 396);
        assert_eq!(layout.card_height, 216);
        assert_eq!(layout.card_limit(), 964);
    }

    #[test]
    fn test_bullet_capacity_per_device() {
        assert_eq!(ScreenshotLayout::for_size(PHONE_SIZE).bullets_that_fit(3), 3);
        assert_eq!(ScreenshotLayout::for_size(TABLET_7_SIZE).bullets_that_fit(3), 3);
        // Third card would end at y = 1100, past the 964 limit
        assert_eq!(ScreenshotLayout::for_size(TABLET_10_SIZE).bullets_that_fit(3), 2);
    }

    #[test]
    fn test_render_dimensions_and_dropped_bullets() {
        let mut painter = offline_painter();
        for (size, dropped) in [(PHONE_SIZE, 0), (TABLET_7_SIZE, 0), (TABLET_10_SIZE, 1)] {
            let outcome = render_screenshot(&mut painter, size, &SCREENS[0], 0);
            assert_eq!(outcome.canvas.size(), size);
            assert_eq!(outcome.dropped_bullets, dropped);
        }
    }

    #[test]
    fn test_cards_are_painted() {
        let mut painter = offline_painter();
        let layout = ScreenshotLayout::for_size(PHONE_SIZE);
        let canvas = render_screenshot(&mut painter, PHONE_SIZE, &SCREENS[2], 2).into_canvas();

        let mid = (layout.width / 2) as u32;
        // Header top border
        assert_eq!(canvas.pixel(mid, layout.margin as u32), Some(CARD_BORDER.to_rgb8()));
        // CTA fill, right of any CTA text
        let cta = layout.cta_rect();
        let probe_x = (layout.width - layout.margin - 10) as u32;
        let probe_y = ((cta.y0 + cta.y1) / 2) as u32;
        assert_eq!(canvas.pixel(probe_x, probe_y), Some(ACCENT_GREEN.to_rgb8()));
    }

    #[test]
    fn test_bullet_number_anchor() {
        let layout = ScreenshotLayout::for_size(PHONE_SIZE);
        assert_eq!(layout.badge_number_center(0), Point::new(93, 492));

        let mut painter = offline_painter();
        let canvas = render_screenshot(&mut painter, PHONE_SIZE, &SCREENS[0], 0).into_canvas();
        // Built-in "1" starts at x = 90, top y = 488; its stem is column 2
        for y in 488..=494 {
            assert_eq!(canvas.pixel(92, y), Some(BADGE_TEXT.to_rgb8()), "y = {y}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut painter = offline_painter();
        let a = render_screenshot(&mut painter, TABLET_7_SIZE, &SCREENS[4], 4).into_canvas();
        let b = render_screenshot(&mut painter, TABLET_7_SIZE, &SCREENS[4], 4).into_canvas();
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
    }
}
