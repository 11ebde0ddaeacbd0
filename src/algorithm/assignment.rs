//! Greedy tile-to-color assignment that consumes the palette
//!
//! Tiles are visited in row-major order. Each tile's average source color is
//! matched against the remaining palette, the chosen color is removed for
//! good, and the whole tile is painted with it. With as many palette colors as
//! tiles, every tile receives a color and every color is used exactly once.

use crate::algorithm::executor::MosaicConfig;
use crate::algorithm::matching::{MatchKind, select_palette_index};
use crate::color::{Color, average};
use crate::io::error::{MosaicError, Result};
use crate::palette::Palette;
use crate::spatial::{Canvas, TileLayout, TileRegion};

/// Color decision made for one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileAssignment {
    /// Tile that was painted
    pub region: TileRegion,
    /// Average source color of the tile
    pub representative: Color,
    /// Palette color painted over the tile
    pub color: Color,
    /// Distance between the representative and painted colors
    pub distance: f64,
    /// Which matching rule chose the color
    pub kind: MatchKind,
}

/// Running totals after a tile has been painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProgress {
    /// Tiles painted so far
    pub tiles_done: usize,
    /// Tiles in the layout
    pub tile_total: usize,
    /// Pixels painted so far
    pub pixels_painted: u64,
    /// Pixels in the whole image, covered or not
    pub pixel_total: u64,
}

/// Receives a notification after each tile is painted
pub trait TileObserver {
    /// Called once per tile, in painting order
    fn tile_painted(&mut self, assignment: &TileAssignment, progress: &TileProgress);
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TileObserver for NoopObserver {
    fn tile_painted(&mut self, _assignment: &TileAssignment, _progress: &TileProgress) {}
}

impl<F> TileObserver for F
where
    F: FnMut(&TileAssignment, &TileProgress),
{
    fn tile_painted(&mut self, assignment: &TileAssignment, progress: &TileProgress) {
        self(assignment, progress);
    }
}

/// Paints a mosaic by handing each tile a unique palette color
#[derive(Debug, Clone, Copy)]
pub struct TileAssigner {
    closeness_margin: f64,
}

impl TileAssigner {
    /// Create an assigner using the configured closeness margin
    pub const fn new(config: &MosaicConfig) -> Self {
        Self {
            closeness_margin: config.closeness_margin,
        }
    }

    /// Paint every tile of `layout` with a color taken from `palette`
    ///
    /// Returns a canvas the size of `source`, black wherever no tile reaches.
    /// The palette is drained by exactly one color per tile.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout was computed for different dimensions than `source`
    /// - The palette holds more colors than there are tiles
    /// - The palette runs out before the last tile
    pub fn assign(
        &self,
        source: &Canvas,
        palette: &mut Palette,
        layout: &TileLayout,
        observer: &mut dyn TileObserver,
    ) -> Result<Canvas> {
        let dimensions = source.dimensions();
        if layout.dimensions() != dimensions {
            return Err(MosaicError::InvalidSourceData {
                reason: format!(
                    "layout is for {}x{} but source is {}x{}",
                    layout.dimensions().width,
                    layout.dimensions().height,
                    dimensions.width,
                    dimensions.height
                ),
            });
        }

        let tile_total = layout.tile_count();
        if palette.len() > tile_total {
            return Err(MosaicError::PaletteSurplus {
                remaining: palette.len() - tile_total,
            });
        }

        let mut output = Canvas::black(dimensions);
        let mut progress = TileProgress {
            tiles_done: 0,
            tile_total,
            pixels_painted: 0,
            pixel_total: dimensions.pixel_count(),
        };

        for region in layout.regions() {
            let assignment = self.assign_tile(source, palette, &region, tile_total)?;
            output.fill_region(&region, assignment.color)?;

            progress.tiles_done += 1;
            progress.pixels_painted += region.pixel_count();
            observer.tile_painted(&assignment, &progress);
        }

        Ok(output)
    }

    fn assign_tile(
        &self,
        source: &Canvas,
        palette: &mut Palette,
        region: &TileRegion,
        tile_total: usize,
    ) -> Result<TileAssignment> {
        let samples = source.region_colors(region)?;
        let representative = average(&samples).ok_or_else(|| MosaicError::EmptyTile {
            tile_index: region.index,
        })?;

        let exhausted = || MosaicError::PaletteExhausted {
            tile_index: region.index,
            tile_total,
        };
        let selected =
            select_palette_index(representative, palette.colors(), self.closeness_margin)
                .ok_or_else(exhausted)?;
        let color = palette.take(selected.index).ok_or_else(exhausted)?;

        log::trace!(
            "tile {} at ({}, {}): average {:?} -> {:?} ({:?}, distance {:.2})",
            region.index,
            region.x,
            region.y,
            representative,
            color,
            selected.kind,
            selected.distance
        );

        Ok(TileAssignment {
            region: *region,
            representative,
            color,
            distance: selected.distance,
            kind: selected.kind,
        })
    }
}
