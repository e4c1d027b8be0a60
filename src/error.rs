//! Error taxonomy for grid construction, traversal, and encoding.
//!
//! Structural and integrity failures are hard errors that abort the
//! operation that produced them. Script-table gaps are not represented
//! here: an unmapped code is accumulated on [`DecodedText`] as an unknown
//! count instead of raised, so a partially transcribed table still yields
//! an observable decode.
//!
//! [`DecodedText`]: crate::decoder::DecodedText

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by grid construction, traversal, and grid composition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grid input was not exactly 27 rows by 27 columns.
    #[error("grid shape mismatch: {0}")]
    Shape(String),

    /// A cell value fell outside the code domain 1..=64.
    #[error("cell ({row}, {col}) holds {value}, outside the code range 1..=64")]
    ValueRange { row: usize, col: usize, value: u8 },

    /// A coordinate access fell outside the 27x27 grid.
    #[error("coordinate ({row}, {col}) is outside the 27x27 grid")]
    OutOfBounds { row: usize, col: usize },

    /// A pattern's emitted order was not a permutation of all 729 cells.
    #[error("pattern '{pattern}' broke full-cover: {detail}")]
    PatternIntegrity { pattern: String, detail: String },

    /// Two placements wrote different codes into the same cell.
    #[error("placement conflict at ({row}, {col}): cell holds {existing}, new placement wants {proposed}")]
    EncodeConflict {
        row: usize,
        col: usize,
        existing: u8,
        proposed: u8,
    },

    /// A composed grid still had an empty cell at build time.
    #[error("cell ({row}, {col}) was never assigned a code")]
    UnfilledCell { row: usize, col: usize },
}
