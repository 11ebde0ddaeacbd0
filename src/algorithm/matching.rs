//! Palette matching with an early exit for close-enough colors
//!
//! The palette is scanned in order. The first color within the closeness
//! margin of the target wins outright, even if a closer color sits later in
//! the palette. Only when nothing is close enough does the whole palette get
//! compared, and then the closest color wins with ties going to the earliest.

use crate::color::{Color, distance};

/// How a palette color was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// First color in scan order within the closeness margin
    WithinMargin,
    /// Closest color overall, since none was within the margin
    Closest,
}

/// Palette color picked for a target color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMatch {
    /// Position of the chosen color in the palette
    pub index: usize,
    /// Distance from the target to the chosen color
    pub distance: f64,
    /// Which rule selected the color
    pub kind: MatchKind,
}

/// Pick a palette color for `target`
///
/// Returns `None` only for an empty palette.
pub fn select_palette_index(
    target: Color,
    candidates: &[Color],
    closeness_margin: f64,
) -> Option<PaletteMatch> {
    let mut best: Option<PaletteMatch> = None;

    for (index, &candidate) in candidates.iter().enumerate() {
        let candidate_distance = distance(target, candidate);

        if candidate_distance <= closeness_margin {
            return Some(PaletteMatch {
                index,
                distance: candidate_distance,
                kind: MatchKind::WithinMargin,
            });
        }

        // Strict comparison keeps the earliest of equally distant colors
        if best.is_none_or(|current| candidate_distance < current.distance) {
            best = Some(PaletteMatch {
                index,
                distance: candidate_distance,
                kind: MatchKind::Closest,
            });
        }
    }

    best
}
