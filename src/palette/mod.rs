//! Single-use color palettes
//!
//! A palette is generated once, sized to the number of tiles, and drained one
//! color at a time as tiles are assigned.

/// Random palette generation
pub mod generator;
/// Draining pool of palette colors
pub mod pool;

pub use generator::PaletteGenerator;
pub use pool::Palette;
