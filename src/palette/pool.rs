//! Ordered pool of colors consumed one at a time

use crate::color::Color;

/// Ordered collection of colors where every take removes the color for good
///
/// Scan order is preserved across removals so that "first match" stays stable
/// for the colors left behind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap an ordered list of colors
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Colors still available, in scan order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors still available
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether every color has been consumed
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Remove and return the color at `index`, shifting later colors forward
    ///
    /// Returns `None` when the index is past the end of the pool.
    pub fn take(&mut self, index: usize) -> Option<Color> {
        (index < self.colors.len()).then(|| self.colors.remove(index))
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
