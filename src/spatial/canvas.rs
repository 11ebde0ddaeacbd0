//! Pixel grids for source sampling and mosaic output

use crate::color::{Color, OPAQUE_BLACK};
use crate::io::error::{MosaicError, Result};
use crate::spatial::partition::{Dimensions, TileRegion};
use image::{Rgba, RgbaImage};
use ndarray::{Array2, Axis, Slice};

/// Two-dimensional grid of colors indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Color>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `color`
    pub fn filled(dimensions: Dimensions, color: Color) -> Self {
        Self {
            pixels: Array2::from_elem(
                (dimensions.height as usize, dimensions.width as usize),
                color,
            ),
        }
    }

    /// Create an opaque black canvas
    pub fn black(dimensions: Dimensions) -> Self {
        Self::filled(dimensions, OPAQUE_BLACK)
    }

    /// Wrap an existing `(height, width)` pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no pixels
    pub fn from_pixels(pixels: Array2<Color>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!("canvas must not be empty (got {cols}x{rows})"),
            });
        }
        Ok(Self { pixels })
    }

    /// Copy a decoded RGBA image into a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width or height
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let pixels = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            image
                .get_pixel_checked(col as u32, row as u32)
                .map_or(OPAQUE_BLACK, |pixel| pixel.0)
        });
        Self::from_pixels(pixels)
    }

    /// Render the canvas as an RGBA image buffer
    pub fn to_rgba_image(&self) -> RgbaImage {
        let dimensions = self.dimensions();
        RgbaImage::from_fn(dimensions.width, dimensions.height, |x, y| {
            Rgba(self.pixel(x, y).unwrap_or(OPAQUE_BLACK))
        })
    }

    /// Canvas size in pixels
    pub fn dimensions(&self) -> Dimensions {
        let (rows, cols) = self.pixels.dim();
        Dimensions {
            width: cols as u32,
            height: rows as u32,
        }
    }

    /// Color at pixel `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get((y as usize, x as usize)).copied()
    }

    /// Underlying pixel array
    pub const fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }

    /// Colors inside a tile, row by row
    ///
    /// # Errors
    ///
    /// Returns an error if the tile extends past the canvas
    pub fn region_colors(&self, region: &TileRegion) -> Result<Vec<Color>> {
        let (rows, cols) = self.region_bounds(region)?;
        Ok(self
            .pixels
            .slice_axis(Axis(0), Slice::from(rows.0..rows.1))
            .slice_axis(Axis(1), Slice::from(cols.0..cols.1))
            .iter()
            .copied()
            .collect())
    }

    /// Paint every pixel of a tile with one color
    ///
    /// # Errors
    ///
    /// Returns an error if the tile extends past the canvas
    pub fn fill_region(&mut self, region: &TileRegion, color: Color) -> Result<()> {
        let (rows, cols) = self.region_bounds(region)?;
        self.pixels
            .slice_axis_mut(Axis(0), Slice::from(rows.0..rows.1))
            .slice_axis_mut(Axis(1), Slice::from(cols.0..cols.1))
            .fill(color);
        Ok(())
    }

    fn region_bounds(&self, region: &TileRegion) -> Result<((usize, usize), (usize, usize))> {
        let (height, width) = self.pixels.dim();
        let top = region.y as usize;
        let left = region.x as usize;
        let bottom = top + region.edge as usize;
        let right = left + region.edge as usize;

        if bottom > height || right > width {
            return Err(MosaicError::RegionOutOfBounds {
                tile_index: region.index,
                x: region.x,
                y: region.y,
                edge: region.edge,
                dimensions: (width, height),
            });
        }
        Ok(((top, bottom), (left, right)))
    }
}
