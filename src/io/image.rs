//! Decoding source images and encoding painted canvases

use crate::io::error::{MosaicError, Result};
use crate::spatial::Canvas;
use image::{DynamicImage, ImageFormat};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Raster formats accepted for input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG, written without alpha
    Jpeg,
}

impl RasterFormat {
    /// Detect the format from a path's extension, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not png/jpg/jpeg
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    /// Canonical file extension, without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Matching `image` crate format
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl FromStr for RasterFormat {
    type Err = MosaicError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(MosaicError::UnsupportedFormat {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decode an image file into a canvas
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The data is not a valid image of the given format
/// - The image has zero width or height
pub fn load_canvas(path: &Path, format: RasterFormat) -> Result<Canvas> {
    let mut reader = image::ImageReader::open(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "open source image",
        source: e,
    })?;
    reader.set_format(format.image_format());

    let decoded = reader.decode().map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Canvas::from_rgba_image(&decoded.to_rgba8())
}

/// Encode a canvas and write it to `path`
///
/// JPEG output drops the alpha channel since the format cannot store it.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_canvas(canvas: &Canvas, path: &Path, format: RasterFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let rgba = DynamicImage::ImageRgba8(canvas.to_rgba_image());
    let encoded = match format {
        RasterFormat::Png => rgba,
        RasterFormat::Jpeg => DynamicImage::ImageRgb8(rgba.to_rgb8()),
    };

    encoded
        .save_with_format(path, format.image_format())
        .map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
