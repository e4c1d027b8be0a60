//! Diagonal-Bandh - anti-diagonal sweep
//!
//! Walks the 53 anti-diagonals `row + col = 0..=52` in order, each with
//! ascending row. The diagonals partition the grid, so the sweep is a
//! permutation of all 729 cells.

use super::Bandha;
use crate::grid::{Coordinate, CELL_COUNT, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Anti-diagonal traversal.
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::{Bandha, DiagonalBandha};
/// use bhoovalaya::Coordinate;
///
/// let order = DiagonalBandha.generate();
/// assert_eq!(order.len(), 729);
/// assert_eq!(order[0], Coordinate::new(0, 0));
/// assert_eq!(order[1], Coordinate::new(0, 1));
/// assert_eq!(order[2], Coordinate::new(1, 0));
/// assert_eq!(order[728], Coordinate::new(26, 26));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagonalBandha;

impl Bandha for DiagonalBandha {
    fn name(&self) -> &str {
        "diagonal-bandh"
    }

    fn generate(&self) -> Vec<Coordinate> {
        let mut order = Vec::with_capacity(CELL_COUNT);
        for diagonal in 0..=2 * (GRID_SIZE - 1) {
            let first_row = diagonal.saturating_sub(GRID_SIZE - 1);
            let last_row = diagonal.min(GRID_SIZE - 1);
            for row in first_row..=last_row {
                order.push(Coordinate::new(row, diagonal - row));
            }
        }
        order
    }
}
