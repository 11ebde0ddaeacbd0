//! RGBA color representation and color arithmetic
//!
//! Colors are stored as `[u8; 4]` in red, green, blue, alpha order so they map
//! directly onto `image::Rgba<u8>` pixels without conversion.

/// Averaging of color samples into a single representative color
pub mod average;
/// Distance between colors in RGBA space
pub mod metric;

/// An RGBA color with 8 bits per channel
pub type Color = [u8; 4];

/// Fully opaque alpha value
pub const OPAQUE: u8 = u8::MAX;

/// Background color for regions no tile covers
pub const OPAQUE_BLACK: Color = [0, 0, 0, OPAQUE];

pub use average::average;
pub use metric::distance;
