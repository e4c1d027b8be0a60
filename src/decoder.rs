//! Decoder - numeric sequences to readable text
//!
//! Composes a traversal's numeric sequence with a script table:
//! - conjunct runs collapse to a single ligature grapheme
//! - combining codes attach to the preceding base grapheme
//! - unmapped codes become placeholders, counted rather than raised
//!
//! The steganographic mode runs two fully independent pipelines over one
//! grid; neither shares state with or observes the other.

use crate::bandha::Bandha;
use crate::engine::{traverse, NumericSequence};
use crate::error::Result;
use crate::grid::ChakraGrid;
use crate::script::ScriptTable;
use serde::{Deserialize, Serialize};

/// Placeholder grapheme emitted for a code the script table cannot map.
pub const UNKNOWN_MARK: &str = "\u{FFFD}";

/// Text decoded from one (grid, pattern, script) triple.
///
/// Carries the unknown-code count so callers can judge decode confidence:
/// an incompletely transcribed table yields a partial reading, not an
/// error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedText {
    /// Script table the text was decoded with
    pub script: String,
    /// Pattern the grid was traversed with
    pub pattern: String,
    /// Decoded graphemes in reading order
    pub graphemes: Vec<String>,
    /// Number of codes that had no mapping
    pub unknown: usize,
}

impl DecodedText {
    /// The decoded text as a single string.
    pub fn text(&self) -> String {
        self.graphemes.concat()
    }

    /// Whether every code mapped to a grapheme.
    pub fn is_clean(&self) -> bool {
        self.unknown == 0
    }

    /// Number of graphemes in the reading.
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}

/// Decode a numeric sequence with a script table.
///
/// Walks the codes left to right. At each position the longest matching
/// conjunct rule wins; otherwise a combining code attaches to the
/// preceding base grapheme (a leading or placeholder-adjacent mark stands
/// alone); otherwise the base glyph is emitted. A code with no mapping at
/// all becomes [`UNKNOWN_MARK`] and bumps the unknown counter.
///
/// # Examples
///
/// ```
/// use bhoovalaya::script::tables;
/// use bhoovalaya::{decode, NumericSequence};
///
/// let sequence = NumericSequence {
///     pattern: "chakra-bandh".to_string(),
///     codes: vec![13, 63, 37],
/// };
/// let reading = decode(&sequence, &tables::prakrit_devanagari());
/// // Anusvara (63) attaches to the ka (13): two graphemes, not three.
/// assert_eq!(reading.graphemes, vec!["कं", "म"]);
/// assert!(reading.is_clean());
/// ```
pub fn decode(sequence: &NumericSequence, table: &ScriptTable) -> DecodedText {
    let codes = &sequence.codes;
    let mut graphemes: Vec<String> = Vec::with_capacity(codes.len());
    let mut unknown = 0;
    // Whether the most recent grapheme can take a combining mark.
    let mut attachable = false;

    let mut i = 0;
    while i < codes.len() {
        if let Some((run_len, glyph)) = table.match_conjunct(&codes[i..]) {
            graphemes.push(glyph.to_string());
            attachable = true;
            i += run_len;
            continue;
        }

        let code = codes[i];
        i += 1;

        if let Some(mark) = table.combining_mark(code) {
            match graphemes.last_mut() {
                Some(last) if attachable => last.push_str(mark),
                _ => {
                    graphemes.push(mark.to_string());
                    attachable = false;
                }
            }
            continue;
        }

        match table.glyph(code) {
            Some(glyph) => {
                graphemes.push(glyph.to_string());
                attachable = true;
            }
            None => {
                graphemes.push(UNKNOWN_MARK.to_string());
                unknown += 1;
                attachable = false;
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        script = table.name(),
        pattern = %sequence.pattern,
        graphemes = graphemes.len(),
        unknown,
        "decode complete"
    );

    DecodedText {
        script: table.name().to_string(),
        pattern: sequence.pattern.clone(),
        graphemes,
        unknown,
    }
}

/// Traverse and decode in one step.
pub fn decode_grid(
    grid: &ChakraGrid,
    bandha: &dyn Bandha,
    table: &ScriptTable,
) -> Result<DecodedText> {
    let sequence = traverse(grid, bandha)?;
    Ok(decode(&sequence, table))
}

/// Decode the primary text and a steganographically embedded second text
/// from the same grid.
///
/// The two pipelines are independent pure computations; their relative
/// execution order cannot affect either result.
///
/// # Examples
///
/// ```
/// use bhoovalaya::bandha::{ChakraBandha, DiagonalBandha};
/// use bhoovalaya::script::tables;
/// use bhoovalaya::{decode_hidden, ChakraGrid};
///
/// let grid = ChakraGrid::repeating();
/// let table = tables::kannada();
/// let (primary, hidden) =
///     decode_hidden(&grid, &ChakraBandha::default(), &table, &DiagonalBandha, &table).unwrap();
/// assert_eq!(primary.pattern, "chakra-bandh");
/// assert_eq!(hidden.pattern, "diagonal-bandh");
/// ```
pub fn decode_hidden(
    grid: &ChakraGrid,
    primary_pattern: &dyn Bandha,
    primary_table: &ScriptTable,
    hidden_pattern: &dyn Bandha,
    hidden_table: &ScriptTable,
) -> Result<(DecodedText, DecodedText)> {
    let primary = decode_grid(grid, primary_pattern, primary_table)?;
    let hidden = decode_grid(grid, hidden_pattern, hidden_table)?;
    Ok((primary, hidden))
}
