//! Euclidean distance over the four RGBA channels

use crate::color::Color;

/// Euclidean distance between two colors across red, green, blue and alpha
///
/// Symmetric, and zero only for channel-wise identical colors.
pub fn distance(a: Color, b: Color) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let delta = f64::from(x) - f64::from(y);
            delta * delta
        })
        .sum::<f64>()
        .sqrt()
}
