//! Bhoovalaya - Chakra Traversal and Decode Engine
//!
//! Copyright (c) 2025 Bhoovalaya Contributors
//! Licensed under MIT License
//!
//! Production Rust implementation of the Siri Bhoovalaya decoding scheme:
//! a fixed 27x27 numeric grid (the Chakra) read under deterministic
//! cell-visitation patterns (Bandhas) and transliterated into historical
//! Indic scripts.
//!
//! # Overview
//!
//! - A [`ChakraGrid`] holds 729 cell codes in 1..=64, immutable once built
//! - A [`Bandha`] emits a verified permutation of all 729 coordinates
//! - [`traverse`] reads the grid in pattern order into a [`NumericSequence`]
//! - A [`ScriptTable`] maps codes to graphemes, with table-driven
//!   combining marks and conjunct runs
//! - [`decode`] turns a sequence into a [`DecodedText`]; [`decode_hidden`]
//!   re-walks the same grid under a second pattern to surface the
//!   steganographically embedded verse
//!
//! # Quick Start
//!
//! ```
//! use bhoovalaya::bandha::ChakraBandha;
//! use bhoovalaya::script::tables;
//! use bhoovalaya::{decode_grid, ChakraGrid};
//!
//! let grid = ChakraGrid::repeating();
//! let reading = decode_grid(&grid, &ChakraBandha::default(), &tables::kannada()).unwrap();
//! // Full table coverage: every one of the 729 codes maps to a grapheme.
//! assert!(reading.is_clean());
//! assert!(!reading.is_empty());
//! ```

pub mod bandha;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod script;

// Re-export main types for convenience
pub use bandha::{Bandha, BandhaRegistry};
pub use decoder::{decode, decode_grid, decode_hidden, DecodedText, UNKNOWN_MARK};
pub use encoder::GridComposer;
pub use engine::{traverse, NumericSequence};
pub use error::{Error, Result};
pub use grid::{ChakraGrid, Coordinate, CELL_COUNT, CODE_MAX, CODE_MIN, GRID_SIZE};
pub use script::{ScriptRegistry, ScriptTable, ScriptTableBuilder};
