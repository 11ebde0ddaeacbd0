//! Random opaque palette generation

use crate::color::{Color, OPAQUE};
use crate::palette::Palette;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Produces palettes of uniformly random opaque colors
///
/// Duplicate colors are possible and left in place; the matching policy
/// resolves ties by scan order.
pub struct PaletteGenerator {
    rng: StdRng,
}

impl PaletteGenerator {
    /// Create a generator with a fixed seed for reproducible palettes
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from operating system randomness
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generate a palette holding exactly `count` colors
    pub fn generate(&mut self, count: usize) -> Palette {
        let colors = (0..count).map(|_| self.random_color()).collect();
        Palette::new(colors)
    }

    fn random_color(&mut self) -> Color {
        [
            self.rng.random::<u8>(),
            self.rng.random::<u8>(),
            self.rng.random::<u8>(),
            OPAQUE,
        ]
    }
}
