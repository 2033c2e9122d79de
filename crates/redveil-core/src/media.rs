//! File access for carrier images.
//!
//! The codec itself is pure over in-memory grids; this module is the only
//! place that touches the filesystem. Lossy formats are refused outright
//! since a single resampled pixel destroys the embedded bit stream.

use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::Error;
use crate::result::Result;

/// formats the `image` crate writes back without resampling pixel values
const LOSSLESS_EXTENSIONS: [&str; 3] = ["png", "bmp", "tiff"];

fn is_lossless_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| LOSSLESS_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Loads a carrier image from `path`.
pub fn from_file(path: &Path) -> Result<RgbaImage> {
    if !is_lossless_extension(path) {
        return Err(Error::UnsupportedMedia);
    }

    Ok(image::open(path)
        .map_err(|e| {
            error!("Error opening image {path:?}: {e}");
            Error::InvalidImageMedia
        })?
        .to_rgba8())
}

/// Writes `image` to `path`, same lossless gate as [`from_file`].
pub fn save_as(image: &RgbaImage, path: &Path) -> Result<()> {
    if !is_lossless_extension(path) {
        return Err(Error::UnsupportedMedia);
    }

    image.save(path).map_err(|e| {
        error!("Error saving image {path:?}: {e}");
        match e {
            image::ImageError::IoError(source) => Error::WriteError { source },
            _ => Error::ImageEncodingError,
        }
    })
}
