//! Store icon

use image::RgbaImage;
use storeshots_image::{fit_rect, resize_square, ObjectPosition};
use storeshots_paint::{Canvas, Point};

use super::scaled;
use crate::palette::{BACKGROUND_TOP, PLAY_ICON_SIZE};

/// Share of the icon canvas covered by the source artwork
pub const ICON_SCALE: f64 = 0.82;

/// Render the 512x512 store icon: the source artwork scaled to 82% and
/// centered on the darkest background color. The result is opaque.
pub fn render_play_icon(source: &RgbaImage) -> Canvas {
    let side = PLAY_ICON_SIZE.width;
    let icon_size = scaled(side, ICON_SCALE).max(1) as u32;
    let resized = resize_square(source, icon_size);

    let place = fit_rect(
        icon_size,
        icon_size,
        PLAY_ICON_SIZE.width,
        PLAY_ICON_SIZE.height,
        ObjectPosition::CENTER,
    );

    let mut canvas = Canvas::new(PLAY_ICON_SIZE.width, PLAY_ICON_SIZE.height, BACKGROUND_TOP);
    canvas.composite(&resized, Point::new(place.x, place.y));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_geometry() {
        let source = RgbaImage::from_pixel(64, 64, image::Rgba([255, 0, 0, 255]));
        let canvas = render_play_icon(&source);
        assert_eq!((canvas.width(), canvas.height()), (512, 512));

        // 419 px artwork at offset 46: the margins stay background
        assert_eq!(canvas.pixel(45, 256), Some(BACKGROUND_TOP.to_rgb8()));
        assert_eq!(canvas.pixel(466, 256), Some(BACKGROUND_TOP.to_rgb8()));
        assert_eq!(canvas.pixel(256, 256), Some([255, 0, 0]));
    }

    #[test]
    fn test_transparent_source_shows_background() {
        let source = RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 0]));
        let canvas = render_play_icon(&source);
        assert!(canvas
            .as_image()
            .pixels()
            .all(|p| p.0 == BACKGROUND_TOP.to_rgb8()));
    }
}
