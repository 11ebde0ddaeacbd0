//! Per-channel mean of a set of color samples

use crate::color::Color;

/// Reduce a set of colors to their per-channel mean
///
/// Channel means are truncated toward zero. A single sample is returned as-is
/// and an empty slice yields `None`.
pub fn average(colors: &[Color]) -> Option<Color> {
    match colors {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut sums = [0u64; 4];
            for color in colors {
                for (sum, &channel) in sums.iter_mut().zip(color.iter()) {
                    *sum += u64::from(channel);
                }
            }

            let count = colors.len() as u64;
            // Mean of u8 samples always fits back into u8
            Some(sums.map(|sum| (sum / count) as u8))
        }
    }
}
