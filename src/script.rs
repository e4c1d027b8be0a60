//! Script tables - numeric code to grapheme mapping
//!
//! A [`ScriptTable`] carries everything the decoder needs for one target
//! script:
//! - base mappings: single code -> standalone glyph
//! - combining mappings: code -> mark that attaches to the preceding base
//!   grapheme (the table-driven "combining range")
//! - conjunct rules: multi-code run -> single ligature grapheme
//!
//! Whether a code combines is a property of the table, never of the
//! decoder, so a new script is a new table and nothing else. Tables are
//! built once, then shared read-only across decode calls.

pub mod tables;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::grid::{CODE_MAX, CODE_MIN};

/// Per-script mapping from cell codes to graphemes.
///
/// # Examples
///
/// ```
/// use bhoovalaya::ScriptTable;
///
/// let table = ScriptTable::builder("demo")
///     .glyph(1, "ka")
///     .glyph(2, "ra")
///     .combining(3, "-")
///     .build();
/// assert_eq!(table.glyph(1), Some("ka"));
/// assert!(table.is_combining(3));
/// assert_eq!(table.glyph(4), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTable {
    name: String,
    glyphs: HashMap<u8, String>,
    combining: HashMap<u8, String>,
    conjuncts: Vec<(Vec<u8>, String)>,
}

impl ScriptTable {
    /// Start building a table for the named script.
    pub fn builder(name: &str) -> ScriptTableBuilder {
        ScriptTableBuilder {
            table: ScriptTable {
                name: name.to_string(),
                glyphs: HashMap::new(),
                combining: HashMap::new(),
                conjuncts: Vec::new(),
            },
        }
    }

    /// Registry name of this script.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Standalone glyph for a base code, if mapped.
    pub fn glyph(&self, code: u8) -> Option<&str> {
        self.glyphs.get(&code).map(String::as_str)
    }

    /// Combining mark for a code in this table's combining range.
    pub fn combining_mark(&self, code: u8) -> Option<&str> {
        self.combining.get(&code).map(String::as_str)
    }

    /// Whether the table marks this code as combining.
    pub fn is_combining(&self, code: u8) -> bool {
        self.combining.contains_key(&code)
    }

    /// Longest conjunct rule matching a prefix of `run`.
    ///
    /// Returns the matched run length and the ligature grapheme.
    pub fn match_conjunct(&self, run: &[u8]) -> Option<(usize, &str)> {
        let mut best: Option<(usize, &str)> = None;
        for (rule, glyph) in &self.conjuncts {
            if run.starts_with(rule) && best.map_or(true, |(len, _)| rule.len() > len) {
                best = Some((rule.len(), glyph.as_str()));
            }
        }
        best
    }

    /// Number of codes in 1..=64 with a base or combining mapping.
    ///
    /// Full coverage (64) guarantees a decode with no unknown-code
    /// placeholders; partial tables still decode, reporting the gaps.
    pub fn coverage(&self) -> usize {
        (CODE_MIN..=CODE_MAX)
            .filter(|code| self.glyphs.contains_key(code) || self.combining.contains_key(code))
            .count()
    }

    /// Whether every code in 1..=64 has a mapping.
    pub fn is_complete(&self) -> bool {
        self.coverage() == (CODE_MAX - CODE_MIN + 1) as usize
    }

    /// Reverse lookup: the code for a single grapheme, if any.
    ///
    /// Scans codes in ascending order, so a grapheme reachable through two
    /// codes resolves to the smaller one.
    pub fn code_for(&self, grapheme: &str) -> Option<u8> {
        for code in CODE_MIN..=CODE_MAX {
            if self.glyphs.get(&code).map(String::as_str) == Some(grapheme)
                || self.combining.get(&code).map(String::as_str) == Some(grapheme)
            {
                return Some(code);
            }
        }
        None
    }

    /// Greedy longest-match encoding of a text into a code sequence.
    ///
    /// The inverse of decoding, used to compose synthetic grids. Returns
    /// `None` when some part of the text has no mapping in this table.
    ///
    /// # Examples
    ///
    /// ```
    /// use bhoovalaya::ScriptTable;
    ///
    /// let table = ScriptTable::builder("demo")
    ///     .glyph(1, "ka")
    ///     .glyph(2, "kara")
    ///     .build();
    /// // Longest match wins: "kara" is code 2, not codes [1, ...].
    /// assert_eq!(table.encode("karaka"), Some(vec![2, 1]));
    /// assert_eq!(table.encode("xyz"), None);
    /// ```
    pub fn encode(&self, text: &str) -> Option<Vec<u8>> {
        let mut codes = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let mut best: Option<(usize, Vec<u8>)> = None;
            for (rule, glyph) in &self.conjuncts {
                if rest.starts_with(glyph.as_str())
                    && best.as_ref().map_or(true, |(len, _)| glyph.len() > *len)
                {
                    best = Some((glyph.len(), rule.clone()));
                }
            }
            for code in CODE_MIN..=CODE_MAX {
                for map in [&self.glyphs, &self.combining] {
                    if let Some(glyph) = map.get(&code) {
                        if rest.starts_with(glyph.as_str())
                            && best.as_ref().map_or(true, |(len, _)| glyph.len() > *len)
                        {
                            best = Some((glyph.len(), vec![code]));
                        }
                    }
                }
            }
            let (matched_len, mut matched_codes) = best?;
            codes.append(&mut matched_codes);
            rest = &rest[matched_len..];
        }
        Some(codes)
    }
}

/// Chained builder for [`ScriptTable`].
pub struct ScriptTableBuilder {
    table: ScriptTable,
}

impl ScriptTableBuilder {
    /// Map a base code to a standalone glyph.
    pub fn glyph(mut self, code: u8, glyph: &str) -> Self {
        self.table.glyphs.insert(code, glyph.to_string());
        self
    }

    /// Mark a code as combining and map it to its attached form.
    pub fn combining(mut self, code: u8, mark: &str) -> Self {
        self.table.combining.insert(code, mark.to_string());
        self
    }

    /// Add a multi-code conjunct rule producing a single grapheme.
    pub fn conjunct(mut self, run: &[u8], glyph: &str) -> Self {
        self.table.conjuncts.push((run.to_vec(), glyph.to_string()));
        self
    }

    /// Finish the table.
    pub fn build(self) -> ScriptTable {
        self.table
    }
}

/// Name-keyed catalog of script tables.
///
/// The counterpart of [`BandhaRegistry`]: constructed explicitly, passed
/// to callers, extensible without touching the decoder.
///
/// [`BandhaRegistry`]: crate::bandha::BandhaRegistry
///
/// # Examples
///
/// ```
/// use bhoovalaya::ScriptRegistry;
///
/// let registry = ScriptRegistry::with_builtin();
/// assert_eq!(
///     registry.names(),
///     vec!["kannada", "prakrit-devanagari", "sanskrit-devanagari"],
/// );
/// ```
#[derive(Clone, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, Arc<ScriptTable>>,
}

impl ScriptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tables: `kannada`,
    /// `sanskrit-devanagari`, `prakrit-devanagari`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(tables::kannada());
        registry.register(tables::sanskrit_devanagari());
        registry.register(tables::prakrit_devanagari());
        registry
    }

    /// Register a table under its own name, replacing any previous entry
    /// with that name.
    pub fn register(&mut self, table: ScriptTable) {
        self.scripts.insert(table.name().to_string(), Arc::new(table));
    }

    /// Look up a table by script name.
    pub fn get(&self, name: &str) -> Option<Arc<ScriptTable>> {
        self.scripts.get(name).cloned()
    }

    /// Registered script names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scripts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
