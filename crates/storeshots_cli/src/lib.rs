//! Store listing asset generator
//!
//! Renders a store icon, a feature graphic and per-device screenshot sets
//! from a fixed table of screen descriptions, then writes a manifest and a
//! zip archive of everything produced.
//!
//! ```ignore
//! use storeshots::{Exporter, StoreshotsConfig};
//!
//! let config = StoreshotsConfig::load_from_dir(root)?;
//! let report = Exporter::new(root, &config)?.run()?;
//! ```

pub mod compose;
pub mod config;
pub mod export;
pub mod palette;
pub mod screens;

pub use config::StoreshotsConfig;
pub use export::{ExportError, ExportReport, Exporter};
pub use palette::DeviceClass;
pub use screens::{ScreenSpec, SCREENS};
