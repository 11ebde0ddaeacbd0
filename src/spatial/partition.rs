//! Division of an image into a regular grid of square tiles
//!
//! Only whole tiles are laid out. Pixels past the last full column or row of
//! tiles stay uncovered and keep the output background color.

use crate::io::error::{Result, invalid_parameter};

/// Image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting zero-sized images
    ///
    /// # Errors
    ///
    /// Returns an error if either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"width and height must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Total number of pixels
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Square tile size together with whether it divides the image exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    /// Side length of each tile in pixels
    pub edge: u32,
    /// True when the tiles cover the image with no remainder on either axis
    pub perfect_cut: bool,
}

impl TileSpec {
    /// Describe tiles of the given edge laid over an image
    pub const fn for_dimensions(dimensions: Dimensions, edge: u32) -> Self {
        let perfect_cut =
            edge > 0 && dimensions.width % edge == 0 && dimensions.height % edge == 0;
        Self { edge, perfect_cut }
    }
}

/// One tile's position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Row-major position of the tile within the layout
    pub index: usize,
    /// Left pixel column
    pub x: u32,
    /// Top pixel row
    pub y: u32,
    /// Side length in pixels
    pub edge: u32,
}

impl TileRegion {
    /// Number of pixels inside the tile
    pub const fn pixel_count(&self) -> u64 {
        self.edge as u64 * self.edge as u64
    }
}

/// Grid of whole tiles laid over an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    dimensions: Dimensions,
    spec: TileSpec,
    columns: u32,
    rows: u32,
}

impl TileLayout {
    /// Image the layout was computed for
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Tile size used by the layout
    pub const fn spec(&self) -> TileSpec {
        self.spec
    }

    /// Number of tiles per row
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles, which is also the required palette size
    pub const fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Number of pixels covered by tiles
    pub const fn covered_pixels(&self) -> u64 {
        self.tile_count() as u64 * self.spec.edge as u64 * self.spec.edge as u64
    }

    /// Tiles in row-major order: left to right, then top to bottom
    pub fn regions(&self) -> impl Iterator<Item = TileRegion> + '_ {
        let edge = self.spec.edge;
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| TileRegion {
                index: row as usize * self.columns as usize + col as usize,
                x: col * edge,
                y: row * edge,
                edge,
            })
        })
    }
}

/// Tile sizes to consider for an image
///
/// Currently yields only the configured edge. Exploring alternative edges that
/// cut the image nearly evenly would extend this list.
pub fn candidate_cuts(dimensions: Dimensions, edge: u32) -> Vec<TileSpec> {
    vec![TileSpec::for_dimensions(dimensions, edge)]
}

/// Lay whole square tiles of the given edge over an image
///
/// The tile count is `floor(width / edge) * floor(height / edge)`.
///
/// # Errors
///
/// Returns an error if `edge` is zero
pub fn partition(dimensions: Dimensions, edge: u32) -> Result<TileLayout> {
    if edge == 0 {
        return Err(invalid_parameter(
            "tile_edge",
            &edge,
            &"tile edge must be at least one pixel",
        ));
    }

    Ok(TileLayout {
        dimensions,
        spec: TileSpec::for_dimensions(dimensions, edge),
        columns: dimensions.width / edge,
        rows: dimensions.height / edge,
    })
}
