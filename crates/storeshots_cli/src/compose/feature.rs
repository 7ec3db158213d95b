//! Feature graphic (1024x500 banner)

use image::RgbaImage;
use storeshots_image::{fit_rect, resize_square, ObjectPosition};
use storeshots_paint::{render_backdrop, Canvas, Color, Point, Rect, RoundedRect, ShapeStyle};
use storeshots_text::{FontWeight, TextPainter};

use crate::palette::{brand_backdrop, FEATURE_SIZE, TEXT_LIGHT, TEXT_MUTED};

pub const FEATURE_TITLE: &str = "Events";
pub const FEATURE_SUBTITLE: &str = "Organize events. Register participants. Manage sponsors.";
pub const FEATURE_TAGS: [&str; 3] = [
    "Organizer + Participant",
    "Supabase + Stripe",
    "Closed Testing Build",
];

const ICON_SIZE: u32 = 210;
const ICON_X: i32 = 72;
/// Padding between the icon and the edge of its backing chip
const CHIP_PAD: i32 = 17;
const TEXT_X: i32 = 340;
const TAG_Y: i32 = 290;
const TAG_HEIGHT: i32 = 44;
const TAG_GAP: i32 = 14;

/// Render the feature graphic: brand backdrop, the icon on a translucent
/// rounded chip, title, subtitle, and a row of tag chips.
pub fn render_feature_graphic(painter: &mut TextPainter, icon: &RgbaImage) -> Canvas {
    let mut canvas = render_backdrop(
        FEATURE_SIZE.width,
        FEATURE_SIZE.height,
        &brand_backdrop(FEATURE_SIZE),
    );

    let icon_y = fit_rect(
        ICON_SIZE,
        ICON_SIZE,
        FEATURE_SIZE.width,
        FEATURE_SIZE.height,
        ObjectPosition::CENTER_LEFT,
    )
    .y;

    let chip_side = ICON_SIZE as i32 + 2 * CHIP_PAD;
    let chip = RoundedRect::new(
        Rect::new(ICON_X - CHIP_PAD, icon_y - CHIP_PAD, chip_side, chip_side),
        42.0,
    );
    canvas.draw_rounded_rect(
        chip,
        &ShapeStyle::filled(Color::rgba(5, 31, 50, 210))
            .with_stroke(Color::rgba(150, 198, 222, 180), 2),
    );
    canvas.composite(&resize_square(icon, ICON_SIZE), Point::new(ICON_X, icon_y));

    let title_font = painter.font(64, FontWeight::Bold);
    let subtitle_font = painter.font(29, FontWeight::Regular);
    let tag_font = painter.font(22, FontWeight::Bold);

    painter.draw_text(
        &mut canvas,
        FEATURE_TITLE,
        &title_font,
        TEXT_LIGHT,
        Point::new(TEXT_X, 130),
    );
    painter.draw_text(
        &mut canvas,
        FEATURE_SUBTITLE,
        &subtitle_font,
        TEXT_MUTED,
        Point::new(TEXT_X, 220),
    );

    let tag_style = ShapeStyle::filled((7, 44, 72)).with_stroke((120, 174, 201), 2);
    let mut x = TEXT_X;
    for tag in FEATURE_TAGS {
        let width = tag_font.measure(tag).width as i32 + 2 * CHIP_PAD;
        canvas.draw_rounded_rect(
            RoundedRect::new(Rect::from_corners(x, TAG_Y, x + width, TAG_Y + TAG_HEIGHT), 18.0),
            &tag_style,
        );
        painter.draw_text(
            &mut canvas,
            tag,
            &tag_font,
            Color::rgb(222, 238, 249),
            Point::new(x + CHIP_PAD, TAG_Y + 10),
        );
        x += width + TAG_GAP;
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeshots_text::{FontCandidate, FontResolver};

    fn offline_painter() -> TextPainter {
        TextPainter::new(
            FontResolver::with_candidates(vec![FontCandidate::regular("/nonexistent.ttf")])
                .system_fallback(false),
        )
    }

    fn icon() -> RgbaImage {
        RgbaImage::from_pixel(48, 48, image::Rgba([240, 60, 60, 255]))
    }

    #[test]
    fn test_feature_graphic_dimensions() {
        let canvas = render_feature_graphic(&mut offline_painter(), &icon());
        assert_eq!((canvas.width(), canvas.height()), (1024, 500));
    }

    #[test]
    fn test_icon_is_vertically_centered() {
        let canvas = render_feature_graphic(&mut offline_painter(), &icon());
        // Icon spans y 145..=354 at x 72..=281
        assert_eq!(canvas.pixel(72, 145), Some([240, 60, 60]));
        assert_eq!(canvas.pixel(281, 354), Some([240, 60, 60]));
        assert_ne!(canvas.pixel(150, 144), Some([240, 60, 60]));
    }

    #[test]
    fn test_chip_corners_stay_transparent() {
        let plain = render_backdrop(1024, 500, &brand_backdrop(FEATURE_SIZE));
        let canvas = render_feature_graphic(&mut offline_painter(), &icon());
        // Top-left corner of the chip's bounding box is outside the rounded shape
        assert_eq!(canvas.pixel(55, 128), plain.pixel(55, 128));
        // The chip edge midpoint is covered by the border
        assert_ne!(canvas.pixel(150, 128), plain.pixel(150, 128));
    }

    #[test]
    fn test_feature_graphic_is_deterministic() {
        let a = render_feature_graphic(&mut offline_painter(), &icon());
        let b = render_feature_graphic(&mut offline_painter(), &icon());
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
    }
}
