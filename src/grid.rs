//! Chakra grid - the 27x27 numeric cell container
//!
//! The grid is the single source of truth for a decoding session:
//! - Exactly 729 cells, validated at construction
//! - Every cell code in the domain 1..=64
//! - Read-only after construction; traversals never mutate it

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Side length of the Chakra grid
pub const GRID_SIZE: usize = 27;

/// Total number of cells (27 x 27)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Smallest valid cell code
pub const CODE_MIN: u8 = 1;

/// Largest valid cell code
pub const CODE_MAX: u8 = 64;

/// Zero-indexed (row, column) address of a single cell.
///
/// The addressing unit between a traversal pattern and the grid. A
/// `Coordinate` may hold any pair; [`ChakraGrid::get`] and the traversal
/// self-check reject out-of-range addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from a row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use bhoovalaya::Coordinate;
    ///
    /// let c = Coordinate::new(3, 7);
    /// assert_eq!(c.row, 3);
    /// assert_eq!(c.col, 7);
    /// ```
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Whether both row and column fall inside the 27x27 grid.
    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Row-major cell offset. Only meaningful when `in_bounds()` holds.
    #[inline]
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

/// The 27x27 Chakra grid of cell codes.
///
/// Constructed once per decoding session by an external loader and
/// immutable thereafter. Serde round-trips go through the row-major cell
/// vector so deserialized grids pass the same validation as constructed
/// ones.
///
/// # Examples
///
/// ```
/// use bhoovalaya::{ChakraGrid, Coordinate};
///
/// let grid = ChakraGrid::repeating();
/// assert_eq!(grid.get(Coordinate::new(0, 0)).unwrap(), 1);
/// assert_eq!(grid.get(Coordinate::new(2, 9)).unwrap(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ChakraGrid {
    cells: Vec<u8>,
}

impl ChakraGrid {
    /// Build a grid from 27 rows of 27 cell codes.
    ///
    /// Fails with [`Error::Shape`] when the input is not exactly 27x27 and
    /// with [`Error::ValueRange`] when any cell falls outside 1..=64. No
    /// partial grid escapes a failed construction.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        if rows.len() != GRID_SIZE {
            return Err(Error::Shape(format!(
                "{} rows, expected {}",
                rows.len(),
                GRID_SIZE
            )));
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != GRID_SIZE {
                return Err(Error::Shape(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    cells.len(),
                    GRID_SIZE
                )));
            }
        }

        let mut flat = Vec::with_capacity(CELL_COUNT);
        for cells in rows {
            flat.extend_from_slice(cells);
        }
        Self::from_row_major(&flat)
    }

    /// Build a grid from 729 row-major cell codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bhoovalaya::{ChakraGrid, Coordinate, CELL_COUNT};
    ///
    /// let grid = ChakraGrid::from_row_major(&vec![1u8; CELL_COUNT]).unwrap();
    /// assert_eq!(grid.get(Coordinate::new(26, 26)).unwrap(), 1);
    ///
    /// assert!(ChakraGrid::from_row_major(&[1, 2, 3]).is_err());
    /// assert!(ChakraGrid::from_row_major(&vec![0u8; CELL_COUNT]).is_err());
    /// ```
    pub fn from_row_major(values: &[u8]) -> Result<Self> {
        if values.len() != CELL_COUNT {
            return Err(Error::Shape(format!(
                "{} cells, expected {}",
                values.len(),
                CELL_COUNT
            )));
        }
        for (i, &value) in values.iter().enumerate() {
            if !(CODE_MIN..=CODE_MAX).contains(&value) {
                return Err(Error::ValueRange {
                    row: i / GRID_SIZE,
                    col: i % GRID_SIZE,
                    value,
                });
            }
        }
        Ok(ChakraGrid {
            cells: values.to_vec(),
        })
    }

    /// Reference fill: codes 1..=64 cycling across all 729 cells.
    ///
    /// The traditional row-major numbering of the Chakra, continued
    /// cyclically so every cell stays inside the code domain.
    pub fn repeating() -> Self {
        let cells = (0..CELL_COUNT)
            .map(|i| (i % CODE_MAX as usize) as u8 + 1)
            .collect();
        ChakraGrid { cells }
    }

    /// Read the code at a coordinate.
    ///
    /// Fails with [`Error::OutOfBounds`] when the coordinate falls outside
    /// the grid.
    pub fn get(&self, coord: Coordinate) -> Result<u8> {
        if !coord.in_bounds() {
            return Err(Error::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(self.cells[coord.index()])
    }

    /// The cells in row-major order.
    pub fn as_row_major(&self) -> &[u8] {
        &self.cells
    }

    /// SHA-256 fingerprint of the cell contents, as lowercase hex.
    ///
    /// Decode results are keyed by grid identity; two grids with the same
    /// cells share a fingerprint regardless of how they were loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bhoovalaya::ChakraGrid;
    ///
    /// let a = ChakraGrid::repeating();
    /// let b = ChakraGrid::repeating();
    /// assert_eq!(a.fingerprint(), b.fingerprint());
    /// assert_eq!(a.fingerprint().len(), 64);
    /// ```
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.cells);
        let hash = hasher.finalize();
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl TryFrom<Vec<u8>> for ChakraGrid {
    type Error = Error;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        ChakraGrid::from_row_major(&values)
    }
}

impl From<ChakraGrid> for Vec<u8> {
    fn from(grid: ChakraGrid) -> Vec<u8> {
        grid.cells
    }
}
