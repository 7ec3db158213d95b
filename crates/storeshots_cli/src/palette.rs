//! Brand palette and artifact geometry

use storeshots_paint::{Backdrop, Color, Highlight, Size, VerticalGradient};

pub const BACKGROUND_TOP: Color = Color::rgb(4, 25, 46);
pub const BACKGROUND_MID: Color = Color::rgb(10, 51, 84);
pub const BACKGROUND_BOTTOM: Color = Color::rgb(17, 109, 119);
pub const ACCENT_GOLD: Color = Color::rgb(241, 198, 92);
pub const ACCENT_GREEN: Color = Color::rgb(45, 188, 164);
pub const TEXT_LIGHT: Color = Color::rgb(246, 251, 255);
pub const TEXT_MUTED: Color = Color::rgb(195, 218, 234);
pub const CARD_BORDER: Color = Color::rgb(123, 176, 203);

/// Fraction of the height where the gradient reaches its middle stop
pub const GRADIENT_SPLIT: f32 = 0.58;

pub const PLAY_ICON_SIZE: Size = Size::new(512, 512);
pub const FEATURE_SIZE: Size = Size::new(1024, 500);
pub const PHONE_SIZE: Size = Size::new(1080, 1920);
pub const TABLET_7_SIZE: Size = Size::new(1200, 1920);
pub const TABLET_10_SIZE: Size = Size::new(1920, 1200);

/// The shared background for the feature graphic and every screenshot
pub fn brand_backdrop(size: Size) -> Backdrop {
    Backdrop {
        gradient: VerticalGradient::three_stop(
            BACKGROUND_TOP,
            BACKGROUND_MID,
            BACKGROUND_BOTTOM,
            GRADIENT_SPLIT,
        ),
        highlights: Highlight::diagonal_walk(size.width, size.height),
    }
}

/// A screenshot target device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Phone,
    Tablet7,
    Tablet10,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 3] = [
        DeviceClass::Phone,
        DeviceClass::Tablet7,
        DeviceClass::Tablet10,
    ];

    /// Output folder name under the output root
    pub fn folder(self) -> &'static str {
        match self {
            DeviceClass::Phone => "screenshots-phone",
            DeviceClass::Tablet7 => "screenshots-tablet-7",
            DeviceClass::Tablet10 => "screenshots-tablet-10",
        }
    }

    pub fn size(self) -> Size {
        match self {
            DeviceClass::Phone => PHONE_SIZE,
            DeviceClass::Tablet7 => TABLET_7_SIZE,
            DeviceClass::Tablet10 => TABLET_10_SIZE,
        }
    }

    /// Screens rendered for this device unless configured otherwise
    pub fn default_count(self) -> usize {
        match self {
            DeviceClass::Phone => 8,
            DeviceClass::Tablet7 | DeviceClass::Tablet10 => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_geometry() {
        assert_eq!(DeviceClass::Phone.size(), Size::new(1080, 1920));
        assert!(DeviceClass::Tablet10.size().is_landscape());
        assert!(!DeviceClass::Tablet7.size().is_landscape());
        let total: usize = DeviceClass::ALL.iter().map(|d| d.default_count()).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_brand_backdrop_matches_palette() {
        let backdrop = brand_backdrop(FEATURE_SIZE);
        let stops = backdrop.gradient.stops();
        assert_eq!(stops[0].color, BACKGROUND_TOP);
        assert_eq!(stops[1].offset, GRADIENT_SPLIT);
        assert_eq!(stops[2].color, BACKGROUND_BOTTOM);
        assert_eq!(backdrop.highlights.len(), 4);
    }
}
