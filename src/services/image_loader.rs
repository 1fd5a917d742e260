//! Image Loader
//!
//! Decodes the primary avatar up front so a missing, truncated or corrupt
//! file is reported before the hero tries to draw it.

use std::path::Path;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// A successfully decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Resolves an image reference, reporting failure as an error
pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<ImageInfo>;
}

/// Loads raster images (JPEG, PNG, GIF, WebP) from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<ImageInfo> {
        let asset_error = |message: String| Error::AssetLoad {
            path: path.display().to_string(),
            message,
        };

        let reader = ImageReader::open(path)
            .map_err(|e| asset_error(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| asset_error(e.to_string()))?;
        let format = reader
            .format()
            .ok_or_else(|| asset_error("unrecognized image format".to_string()))?;
        let image = reader.decode().map_err(|e| asset_error(e.to_string()))?;

        let info = ImageInfo {
            format,
            width: image.width(),
            height: image.height(),
        };
        debug!(path = ?path, ?info, "Avatar image decoded");
        Ok(info)
    }
}
