//! Storeshots Image
//!
//! Image input and output for the asset generator.
//!
//! # Features
//!
//! - Load source images from files, with a distinguishable error for a
//!   missing file
//! - High-quality (Lanczos3) resizing
//! - Placement arithmetic for aligning images in containers
//! - Maximum-compression PNG encoding of opaque RGB canvases
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use storeshots_image::{load_rgba, resize_square};
//!
//! let icon = load_rgba(Path::new("assets/icon.png"))?;
//! let small = resize_square(&icon, 210);
//! ```

mod error;
mod fit;
mod loader;

pub use error::{ImageError, Result};
pub use fit::{fit_rect, FitRect, ObjectPosition};
pub use loader::{load_rgba, resize_square, save_png};
