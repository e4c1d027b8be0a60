//! Chakra-Bandh - concentric-ring traversal
//!
//! The 27x27 grid decomposes into 14 concentric square rings: ring `k`
//! holds the cells with `min(row, col, 26-row, 26-col) == k`, and ring 13
//! is the single center cell (13, 13). The rings partition the 729 cells
//! exactly. Each ring is walked in a constant rotational sense starting at
//! its top-left corner `(k, k)`; the default configuration (clockwise,
//! outer to inner) reproduces the classic spiral that begins at (0, 0) and
//! heads right along the top edge.

use super::Bandha;
use crate::grid::{Coordinate, CELL_COUNT, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Number of concentric rings in the 27x27 grid
pub const RING_COUNT: usize = (GRID_SIZE + 1) / 2;

/// Rotational sense of the ring walk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Order in which the rings themselves are visited
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingOrder {
    OuterToInner,
    InnerToOuter,
}

/// Ring traversal configuration.
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::{Bandha, ChakraBandha};
/// use bhoovalaya::Coordinate;
///
/// let order = ChakraBandha::default().generate();
/// assert_eq!(order.len(), 729);
/// assert_eq!(order[0], Coordinate::new(0, 0));
/// assert_eq!(order[1], Coordinate::new(0, 1));
/// // The walk ends at the center cell.
/// assert_eq!(order[728], Coordinate::new(13, 13));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChakraBandha {
    pub rotation: Rotation,
    pub ring_order: RingOrder,
}

impl Default for ChakraBandha {
    fn default() -> Self {
        ChakraBandha {
            rotation: Rotation::Clockwise,
            ring_order: RingOrder::OuterToInner,
        }
    }
}

impl ChakraBandha {
    /// Create a ring traversal with an explicit rotation and ring order.
    pub fn new(rotation: Rotation, ring_order: RingOrder) -> Self {
        ChakraBandha {
            rotation,
            ring_order,
        }
    }

    /// Walk ring `k` in the configured rotational sense from `(k, k)`.
    fn ring(k: usize, rotation: Rotation) -> Vec<Coordinate> {
        let hi = GRID_SIZE - 1 - k;
        if k == hi {
            return vec![Coordinate::new(k, k)];
        }

        let mut cells = Vec::with_capacity(4 * (hi - k));
        match rotation {
            Rotation::Clockwise => {
                for col in k..=hi {
                    cells.push(Coordinate::new(k, col));
                }
                for row in k + 1..=hi {
                    cells.push(Coordinate::new(row, hi));
                }
                for col in (k..hi).rev() {
                    cells.push(Coordinate::new(hi, col));
                }
                for row in (k + 1..hi).rev() {
                    cells.push(Coordinate::new(row, k));
                }
            }
            Rotation::CounterClockwise => {
                for row in k..=hi {
                    cells.push(Coordinate::new(row, k));
                }
                for col in k + 1..=hi {
                    cells.push(Coordinate::new(hi, col));
                }
                for row in (k..hi).rev() {
                    cells.push(Coordinate::new(row, hi));
                }
                for col in (k + 1..hi).rev() {
                    cells.push(Coordinate::new(k, col));
                }
            }
        }
        cells
    }
}

impl Bandha for ChakraBandha {
    fn name(&self) -> &str {
        "chakra-bandh"
    }

    fn generate(&self) -> Vec<Coordinate> {
        let mut order = Vec::with_capacity(CELL_COUNT);
        match self.ring_order {
            RingOrder::OuterToInner => {
                for k in 0..RING_COUNT {
                    order.extend(Self::ring(k, self.rotation));
                }
            }
            RingOrder::InnerToOuter => {
                for k in (0..RING_COUNT).rev() {
                    order.extend(Self::ring(k, self.rotation));
                }
            }
        }
        order
    }
}
