//! Decoding, resizing and encoding

use crate::error::{ImageError, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

/// Load an image file and convert it to 8-bit RGBA.
///
/// A file that does not exist yields [`ImageError::NotFound`], which
/// callers can tell apart from unreadable or undecodable files.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ImageError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ImageError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let image = image::load_from_memory(&bytes).map_err(ImageError::Decode)?;
    tracing::trace!("decoded {:?} ({}x{})", path, image.width(), image.height());
    Ok(image.to_rgba8())
}

/// Resize to a `side` x `side` square with a Lanczos3 filter, ignoring the
/// source aspect ratio
pub fn resize_square(image: &RgbaImage, side: u32) -> RgbaImage {
    imageops::resize(image, side, side, FilterType::Lanczos3)
}

/// Encode an opaque RGB image as PNG at maximum compression and write it
/// to `path`, replacing any existing file.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut encoded = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut encoded, CompressionType::Best, PngFilter::Adaptive);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(ImageError::Encode)?;

    std::fs::write(path, &encoded).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!("wrote {:?} ({} bytes)", path, encoded.len());
    Ok(())
}
