//! Placement of an unscaled image inside a container

/// Image alignment within its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPosition {
    /// Horizontal alignment (0.0 = left, 0.5 = center, 1.0 = right)
    pub x: f32,
    /// Vertical alignment (0.0 = top, 0.5 = center, 1.0 = bottom)
    pub y: f32,
}

impl ObjectPosition {
    pub const CENTER_LEFT: Self = Self { x: 0.0, y: 0.5 };
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
}

/// Destination rectangle in whole pixels, relative to the container origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Where an `image_width` x `image_height` image lands, at its natural
/// size, in a container.
///
/// Offsets round toward negative infinity, so an odd leftover puts the
/// extra pixel after the image.
pub fn fit_rect(
    image_width: u32,
    image_height: u32,
    container_width: u32,
    container_height: u32,
    position: ObjectPosition,
) -> FitRect {
    let x = ((container_width as f64 - image_width as f64) * position.x as f64).floor() as i32;
    let y = ((container_height as f64 - image_height as f64) * position.y as f64).floor() as i32;
    FitRect {
        x,
        y,
        width: image_width,
        height: image_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_icon_offset_floors() {
        // 419 px icon on a 512 px canvas leaves 93 px, split 46 / 47
        let dst = fit_rect(419, 419, 512, 512, ObjectPosition::CENTER);
        assert_eq!(
            dst,
            FitRect {
                x: 46,
                y: 46,
                width: 419,
                height: 419
            }
        );
    }

    #[test]
    fn test_vertical_centering_only() {
        let dst = fit_rect(210, 210, 1024, 500, ObjectPosition::CENTER_LEFT);
        assert_eq!((dst.x, dst.y), (0, 145));
    }

    #[test]
    fn test_oversized_image_goes_negative() {
        let dst = fit_rect(101, 101, 100, 100, ObjectPosition::CENTER);
        assert_eq!((dst.x, dst.y), (-1, -1));
    }
}
