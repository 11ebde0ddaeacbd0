//! Error types for mosaic construction and file handling

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Source path is missing, unreadable or not a regular file
    InvalidInput {
        /// Path supplied by the user
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// Image format outside the supported raster formats
    UnsupportedFormat {
        /// Extension or format name that was given
        value: String,
    },

    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Decoded data cannot be used as a mosaic source
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to encode or write the output image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A tile needed a color after the palette ran out
    ///
    /// Means the tile count and the palette size diverged.
    PaletteExhausted {
        /// Row-major index of the tile left without a color
        tile_index: usize,
        /// Number of tiles in the layout
        tile_total: usize,
    },

    /// Colors were left over after every tile was assigned
    PaletteSurplus {
        /// Number of unused colors
        remaining: usize,
    },

    /// A tile yielded no pixels to average
    EmptyTile {
        /// Row-major index of the tile
        tile_index: usize,
    },

    /// A tile reaches past the edge of the canvas
    RegionOutOfBounds {
        /// Row-major index of the tile
        tile_index: usize,
        /// Left pixel column of the tile
        x: u32,
        /// Top pixel row of the tile
        y: u32,
        /// Tile edge length
        edge: u32,
        /// Canvas size (width, height)
        dimensions: (usize, usize),
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { path, reason } => {
                write!(f, "Invalid input '{}': {reason}", path.display())
            }
            Self::UnsupportedFormat { value } => {
                write!(
                    f,
                    "Unsupported image format '{value}' (expected png or jpg)"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PaletteExhausted {
                tile_index,
                tile_total,
            } => {
                write!(
                    f,
                    "Palette exhausted at tile {tile_index} of {tile_total}: tile count and palette size diverged"
                )
            }
            Self::PaletteSurplus { remaining } => {
                write!(
                    f,
                    "Palette still holds {remaining} unused colors after the last tile"
                )
            }
            Self::EmptyTile { tile_index } => {
                write!(f, "Tile {tile_index} contains no pixels")
            }
            Self::RegionOutOfBounds {
                tile_index,
                x,
                y,
                edge,
                dimensions,
            } => {
                write!(
                    f,
                    "Tile {tile_index} at ({x}, {y}) with edge {edge} exceeds canvas {}x{}",
                    dimensions.0, dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error for a user-supplied path
pub fn invalid_input(path: &Path, reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidInput {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
