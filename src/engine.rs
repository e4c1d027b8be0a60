//! Traversal engine - drives a Bandha over a grid
//!
//! Produces the ordered numeric sequence a decoder consumes. Traversal is
//! read-only over the grid, so any number of patterns can run against the
//! same grid concurrently with no coordination.

use crate::bandha::{verify_full_cover, Bandha};
use crate::error::Result;
use crate::grid::{ChakraGrid, CELL_COUNT};
use serde::{Deserialize, Serialize};

/// The 729 cell codes read along one pattern's visitation order.
///
/// A disposable artifact: produced fresh per (grid, pattern) pair and
/// immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericSequence {
    /// Name of the pattern that produced the order
    pub pattern: String,
    /// Cell codes in pattern order, always 729 of them
    pub codes: Vec<u8>,
}

/// Read the grid along a pattern's visitation order.
///
/// Runs the pattern's full-cover self-check before reading a single cell;
/// a duplicate or omission fails with [`Error::PatternIntegrity`] and a
/// coordinate outside the grid with [`Error::OutOfBounds`], both
/// propagated unmodified. The grid is never mutated.
///
/// [`Error::PatternIntegrity`]: crate::error::Error::PatternIntegrity
/// [`Error::OutOfBounds`]: crate::error::Error::OutOfBounds
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::ChakraBandha;
/// use bhoovalaya::{traverse, ChakraGrid};
///
/// let grid = ChakraGrid::repeating();
/// let sequence = traverse(&grid, &ChakraBandha::default()).unwrap();
/// assert_eq!(sequence.codes.len(), 729);
/// // The clockwise spiral starts along the top row: codes 1, 2, 3, ...
/// assert_eq!(&sequence.codes[..3], &[1, 2, 3]);
/// ```
pub fn traverse(grid: &ChakraGrid, bandha: &dyn Bandha) -> Result<NumericSequence> {
    let order = bandha.generate();
    verify_full_cover(bandha.name(), &order)?;

    let mut codes = Vec::with_capacity(CELL_COUNT);
    for coord in &order {
        codes.push(grid.get(*coord)?);
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        pattern = bandha.name(),
        grid = %grid.fingerprint(),
        "traversal complete"
    );

    Ok(NumericSequence {
        pattern: bandha.name().to_string(),
        codes,
    })
}
