//! Palette mosaics: rebuild an image from square tiles, each painted with a
//! unique color from a random palette sized to the tile count
//!
//! The image is cut into a grid of fixed-size tiles. Each tile's average color
//! is matched against the palette, preferring the first color that is close
//! enough over an exhaustive search, and every palette color is used once.

#![forbid(unsafe_code)]

/// Tile assignment, palette matching and pipeline execution
pub mod algorithm;
/// RGBA colors, distances and averages
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Random single-use palettes
pub mod palette;
/// Canvases and tile layout
pub mod spatial;

pub use io::error::{MosaicError, Result};
