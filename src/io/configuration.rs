//! Mosaic constants and runtime configuration defaults

/// Side length in pixels of each square tile
pub const TILE_EDGE: u32 = 4;

// Larger margins trade color accuracy for shorter palette scans
/// Distance at or below which a palette color is accepted without searching further
pub const CLOSENESS_MARGIN: f64 = 10.0;

// Output settings
/// Prefix for output files named after their source
pub const OUTPUT_PREFIX: &str = "output_";
/// Suffix appended to an output stem that would overwrite an existing file
pub const COLLISION_SUFFIX: &str = "_1";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
