//! Navamaank-Bandh - nine-grouping traversal
//!
//! The "by nines" walk partitions the 729 cells along the nine-number
//! principle, in one of two groupings:
//! - [`Grouping::Blocks`]: 81 blocks of 9 cells (3x3 sub-squares arranged
//!   in a 9x9 block lattice), blocks row-major, cells within a block
//!   row-major
//! - [`Grouping::Bands`]: 9 horizontal bands of 81 cells (3 rows each),
//!   bands top to bottom, cells within a band column by column
//!
//! Both groupings are exact partitions, so either walk is a permutation of
//! the full grid.

use super::Bandha;
use crate::grid::{Coordinate, CELL_COUNT, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Side length of one 3x3 block, also the height of one band
pub const GROUP_SIDE: usize = 3;

/// Blocks (or bands) per grid side
pub const GROUPS_PER_SIDE: usize = GRID_SIZE / GROUP_SIDE;

/// How the 729 cells are grouped into nines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// 81 blocks of 9 cells
    Blocks,
    /// 9 bands of 81 cells
    Bands,
}

/// Nine-grouping traversal configuration.
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::{Bandha, NavamaankBandha};
/// use bhoovalaya::Coordinate;
///
/// let order = NavamaankBandha::default().generate();
/// assert_eq!(order.len(), 729);
/// // The first block is the 3x3 square at the top-left corner.
/// assert_eq!(order[0], Coordinate::new(0, 0));
/// assert_eq!(order[3], Coordinate::new(1, 0));
/// assert_eq!(order[9], Coordinate::new(0, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavamaankBandha {
    pub grouping: Grouping,
}

impl Default for NavamaankBandha {
    fn default() -> Self {
        NavamaankBandha {
            grouping: Grouping::Blocks,
        }
    }
}

impl NavamaankBandha {
    /// Create a nine-grouping traversal with an explicit grouping.
    pub fn new(grouping: Grouping) -> Self {
        NavamaankBandha { grouping }
    }
}

impl Bandha for NavamaankBandha {
    fn name(&self) -> &str {
        "navamaank-bandh"
    }

    fn generate(&self) -> Vec<Coordinate> {
        let mut order = Vec::with_capacity(CELL_COUNT);
        match self.grouping {
            Grouping::Blocks => {
                for block_row in 0..GROUPS_PER_SIDE {
                    for block_col in 0..GROUPS_PER_SIDE {
                        for row in 0..GROUP_SIDE {
                            for col in 0..GROUP_SIDE {
                                order.push(Coordinate::new(
                                    block_row * GROUP_SIDE + row,
                                    block_col * GROUP_SIDE + col,
                                ));
                            }
                        }
                    }
                }
            }
            Grouping::Bands => {
                for band in 0..GROUPS_PER_SIDE {
                    for col in 0..GRID_SIZE {
                        for row in 0..GROUP_SIDE {
                            order.push(Coordinate::new(band * GROUP_SIDE + row, col));
                        }
                    }
                }
            }
        }
        order
    }
}
