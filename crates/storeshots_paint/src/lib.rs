//! Storeshots Paint
//!
//! A small immediate-mode 2D raster API used to compose store listing
//! artwork.
//!
//! # Features
//!
//! - 8-bit colors with an alpha channel for translucent overlays
//! - Shape primitives (rect, rounded rect, circle, ellipse)
//! - Fills and outlines composited source-over onto an owned canvas
//! - Vertical multi-stop gradients with soft circular highlights

pub mod canvas;
pub mod color;
pub mod gradient;
pub mod primitives;

pub use canvas::{Canvas, ShapeStyle, StrokeStyle};
pub use color::Color;
pub use gradient::{render_backdrop, Backdrop, GradientStop, Highlight, VerticalGradient};
pub use primitives::*;
