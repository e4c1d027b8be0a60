//! Grid composition - the inverse mapping
//!
//! Builds a grid by scattering code sequences along pattern orders. This
//! is how round-trip verification works, and how a steganographic grid is
//! composed: one message placed under one pattern, a second message under
//! another, fillers in whatever cells remain.

use crate::bandha::{verify_full_cover, Bandha};
use crate::error::{Error, Result};
use crate::grid::{ChakraGrid, CELL_COUNT, CODE_MAX, CODE_MIN, GRID_SIZE};

/// Incremental builder of a [`ChakraGrid`] from placed code sequences.
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::ChakraBandha;
/// use bhoovalaya::{traverse, GridComposer};
///
/// let bandha = ChakraBandha::default();
/// let mut composer = GridComposer::new();
/// composer.place(&[5, 6, 7], &bandha).unwrap();
/// composer.fill(1).unwrap();
/// let grid = composer.build().unwrap();
///
/// let sequence = traverse(&grid, &bandha).unwrap();
/// assert_eq!(&sequence.codes[..3], &[5, 6, 7]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridComposer {
    cells: Vec<Option<u8>>,
}

impl GridComposer {
    /// Start from 729 empty cells.
    pub fn new() -> Self {
        GridComposer {
            cells: vec![None; CELL_COUNT],
        }
    }

    /// Place a code sequence along a pattern's visitation order: code `i`
    /// lands in the pattern's `i`-th cell.
    ///
    /// Fails with [`Error::Shape`] for more than 729 codes,
    /// [`Error::ValueRange`] for a code outside 1..=64, and
    /// [`Error::EncodeConflict`] when a cell already holds a different
    /// code. Two placements may overlap only where they agree; on any
    /// failure the composer is left untouched.
    pub fn place(&mut self, codes: &[u8], bandha: &dyn Bandha) -> Result<()> {
        if codes.len() > CELL_COUNT {
            return Err(Error::Shape(format!(
                "{} codes, placement capacity {}",
                codes.len(),
                CELL_COUNT
            )));
        }

        let order = bandha.generate();
        verify_full_cover(bandha.name(), &order)?;

        // Validate the whole placement before writing any cell.
        for (i, &code) in codes.iter().enumerate() {
            let coord = order[i];
            if !(CODE_MIN..=CODE_MAX).contains(&code) {
                return Err(Error::ValueRange {
                    row: coord.row,
                    col: coord.col,
                    value: code,
                });
            }
            if let Some(existing) = self.cells[coord.index()] {
                if existing != code {
                    return Err(Error::EncodeConflict {
                        row: coord.row,
                        col: coord.col,
                        existing,
                        proposed: code,
                    });
                }
            }
        }

        for (i, &code) in codes.iter().enumerate() {
            self.cells[order[i].index()] = Some(code);
        }
        Ok(())
    }

    /// Fill every still-empty cell with a single code.
    pub fn fill(&mut self, code: u8) -> Result<()> {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            if cell.is_none() {
                if !(CODE_MIN..=CODE_MAX).contains(&code) {
                    return Err(Error::ValueRange {
                        row: index / GRID_SIZE,
                        col: index % GRID_SIZE,
                        value: code,
                    });
                }
                *cell = Some(code);
            }
        }
        Ok(())
    }

    /// Number of cells still without a code.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Finish the grid.
    ///
    /// Fails with [`Error::UnfilledCell`] naming the first empty cell if
    /// the composition does not cover the whole grid.
    pub fn build(self) -> Result<ChakraGrid> {
        let mut values = Vec::with_capacity(CELL_COUNT);
        for (index, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(code) => values.push(*code),
                None => {
                    return Err(Error::UnfilledCell {
                        row: index / GRID_SIZE,
                        col: index % GRID_SIZE,
                    })
                }
            }
        }
        ChakraGrid::from_row_major(&values)
    }
}
