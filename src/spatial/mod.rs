//! Spatial data structures for tiling an image
//!
//! This module contains:
//! - Pixel canvases for the source image and the painted output
//! - Grid partitioning into square tiles

/// Source and output pixel grids
pub mod canvas;
/// Tile layout computation
pub mod partition;

pub use canvas::Canvas;
pub use partition::{Dimensions, TileLayout, TileRegion, TileSpec};
