//! End-to-end mosaic construction: partition, generate a palette, assign

use crate::algorithm::assignment::{TileAssigner, TileObserver};
use crate::io::configuration::{CLOSENESS_MARGIN, TILE_EDGE};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::PaletteGenerator;
use crate::spatial::partition::{candidate_cuts, partition};
use crate::spatial::{Canvas, TileLayout};
use std::time::{Duration, Instant};

/// Parameters controlling tile granularity and matching behavior
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MosaicConfig {
    /// Side length of each square tile in pixels
    pub tile_edge: u32,
    /// Distance at or below which a palette color is taken without a full scan
    pub closeness_margin: f64,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_edge: TILE_EDGE,
            closeness_margin: CLOSENESS_MARGIN,
        }
    }
}

impl MosaicConfig {
    /// Check that the parameters describe a usable configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the tile edge is zero or the margin is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.tile_edge == 0 {
            return Err(invalid_parameter(
                "tile_edge",
                &self.tile_edge,
                &"tile edge must be at least one pixel",
            ));
        }
        if !self.closeness_margin.is_finite() || self.closeness_margin < 0.0 {
            return Err(invalid_parameter(
                "closeness_margin",
                &self.closeness_margin,
                &"margin must be a finite, non-negative distance",
            ));
        }
        Ok(())
    }
}

/// Result of a completed mosaic run
#[derive(Debug, Clone)]
pub struct MosaicOutcome {
    /// Painted output image
    pub canvas: Canvas,
    /// Tile layout that was painted
    pub layout: TileLayout,
    /// Time spent partitioning, generating and assigning
    pub elapsed: Duration,
}

/// Runs the full mosaic pipeline over a source canvas
pub struct MosaicExecutor {
    config: MosaicConfig,
    generator: PaletteGenerator,
}

impl MosaicExecutor {
    /// Create an executor from a configuration and palette source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: MosaicConfig, generator: PaletteGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    /// Create an executor whose palettes are reproducible from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_seed(config: MosaicConfig, seed: u64) -> Result<Self> {
        Self::new(config, PaletteGenerator::from_seed(seed))
    }

    /// Configuration in use
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Build a mosaic of `source` with a freshly generated palette
    ///
    /// # Errors
    ///
    /// Returns an error if partitioning fails or the palette and tile count
    /// fall out of step during assignment
    pub fn run(
        &mut self,
        source: &Canvas,
        observer: &mut dyn TileObserver,
    ) -> Result<MosaicOutcome> {
        let start = Instant::now();
        let dimensions = source.dimensions();

        // Alternative cuts are not explored yet, so the first candidate is used
        let edge = candidate_cuts(dimensions, self.config.tile_edge)
            .first()
            .map_or(self.config.tile_edge, |spec| spec.edge);
        let layout = partition(dimensions, edge)?;

        let mut palette = self.generator.generate(layout.tile_count());
        log::info!(
            "Partitioned {}x{} image into {}x{} tiles of {edge}px ({} tiles, perfect cut: {})",
            dimensions.width,
            dimensions.height,
            layout.columns(),
            layout.rows(),
            layout.tile_count(),
            layout.spec().perfect_cut
        );

        let canvas =
            TileAssigner::new(&self.config).assign(source, &mut palette, &layout, observer)?;

        Ok(MosaicOutcome {
            canvas,
            layout,
            elapsed: start.elapsed(),
        })
    }
}
