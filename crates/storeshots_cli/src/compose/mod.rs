//! Composers: each turns fixed content into one finished canvas
//!
//! Composers are pure apart from font resolution: the same inputs and the
//! same available fonts always give the same pixels.

pub mod feature;
pub mod icon;
pub mod screenshot;

pub use feature::render_feature_graphic;
pub use icon::render_play_icon;
pub use screenshot::{render_screenshot, ScreenshotLayout, ScreenshotOutcome};

/// `int(value * factor)`, the scaling rule every layout constant uses
pub(crate) fn scaled(value: u32, factor: f64) -> i32 {
    (value as f64 * factor) as i32
}
