//! Symbol tables loaded from TSV files
//!
//! Each non-comment line is `spelling<TAB>value`. The value is the last
//! whitespace-separated field, so a spelling may itself contain spaces
//! ("ஒரு லட்சம்\t100000").

use indic_itn_core::normalize_phrase;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading lexicon data
///
/// All of these are fatal for the language being built.
#[derive(Error, Debug)]
pub enum LexiconLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor {path}: {reason}")]
    Descriptor { path: PathBuf, reason: String },

    #[error("{table}:{line}: {reason}")]
    Malformed {
        table: String,
        line: usize,
        reason: String,
    },

    #[error("{table}: value {value} for '{spelling}' is outside the {kind} range")]
    OutOfRange {
        table: String,
        spelling: String,
        value: u64,
        kind: TableKind,
    },

    #[error("{table}: '{spelling}' maps to both {first} and {second}")]
    Conflict {
        table: String,
        spelling: String,
        first: u64,
        second: u64,
    },

    #[error("{table}: no spelling for digit {digit}")]
    MissingDigit { table: String, digit: u64 },

    #[error("{table}: table is empty")]
    EmptyTable { table: String },

    #[error("'{spelling}' is listed as both zero and a digit")]
    ZeroDigitOverlap { spelling: String },

    #[error("No spelling for the {tier} scale word")]
    MissingScale { tier: indic_itn_core::Tier },

    #[error("Descriptor in {path} is for {found}, expected {expected}")]
    LanguageMismatch {
        path: PathBuf,
        expected: indic_itn_core::Language,
        found: indic_itn_core::Language,
    },
}

/// Category of a table, which fixes the range its values must fall in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// The zero word(s), value 0
    Zero,
    /// Units 1–9
    Digit,
    /// Loanword teens 10–19
    Teens,
    /// Two-digit words 10–99
    Tens,
    /// Round tens 20–90
    Ties,
    /// Hundred digit carried by a stem or a fused word, 1–9
    HundredStem,
    /// Whole-word round hundreds, 100–900
    RoundHundred,
    /// Thousand count carried by a stem, 1–99
    ThousandStem,
    /// Count in front of a lakh/crore word, 1–999
    Count,
    /// Whole-phrase values (multiples, exceptions, standalone scales)
    Whole,
}

impl TableKind {
    pub fn accepts(&self, value: u64) -> bool {
        match self {
            Self::Zero => value == 0,
            Self::Digit | Self::HundredStem => (1..=9).contains(&value),
            Self::Teens => (10..=19).contains(&value),
            Self::Tens => (10..=99).contains(&value),
            Self::Ties => (20..=90).contains(&value) && value % 10 == 0,
            Self::RoundHundred => (100..=900).contains(&value) && value % 100 == 0,
            Self::ThousandStem => (1..=99).contains(&value),
            Self::Count => (1..=999).contains(&value),
            Self::Whole => value >= 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Digit => "digit",
            Self::Teens => "teens",
            Self::Tens => "tens",
            Self::Ties => "ties",
            Self::HundredStem => "hundred stem",
            Self::RoundHundred => "round hundred",
            Self::ThousandStem => "thousand stem",
            Self::Count => "count",
            Self::Whole => "whole value",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable spelling → value mapping
///
/// Entries keep file order; lookups are linear, tables hold at most a few
/// hundred spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    name: String,
    kind: TableKind,
    entries: Vec<(String, u64)>,
}

impl SymbolTable {
    /// Build a table from in-memory entries, applying the same checks as a file
    pub fn from_entries<S: AsRef<str>>(
        name: &str,
        kind: TableKind,
        entries: impl IntoIterator<Item = (S, u64)>,
    ) -> Result<Self, LexiconLoadError> {
        let mut table = Self {
            name: name.to_string(),
            kind,
            entries: Vec::new(),
        };
        for (spelling, value) in entries {
            table.insert(spelling.as_ref(), value)?;
        }
        table.validate()?;
        Ok(table)
    }

    /// Parse TSV content
    pub fn parse(name: &str, kind: TableKind, content: &str) -> Result<Self, LexiconLoadError> {
        let mut table = Self {
            name: name.to_string(),
            kind,
            entries: Vec::new(),
        };

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| LexiconLoadError::Malformed {
                table: name.to_string(),
                line: idx + 1,
                reason: reason.to_string(),
            };

            let (spelling, value) = match line.split_once('\t') {
                Some((spelling, rest)) if !rest.contains('\t') => (spelling, rest),
                Some(_) => return Err(malformed("expected exactly two columns")),
                None => line
                    .rsplit_once(char::is_whitespace)
                    .ok_or_else(|| malformed("expected `spelling<TAB>value`"))?,
            };

            let value: u64 = value
                .trim()
                .parse()
                .map_err(|_| malformed(&format!("value '{}' is not a number", value.trim())))?;

            if normalize_phrase(spelling).is_empty() {
                return Err(malformed("empty spelling"));
            }

            table.insert(spelling, value)?;
        }

        table.validate()?;
        tracing::debug!(table = %table.name, kind = %kind, entries = table.len(), "Parsed symbol table");
        Ok(table)
    }

    /// Read and parse a TSV file
    pub fn load(path: &Path, kind: TableKind) -> Result<Self, LexiconLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), kind, &content)
    }

    fn insert(&mut self, spelling: &str, value: u64) -> Result<(), LexiconLoadError> {
        let spelling = normalize_phrase(spelling);

        if !self.kind.accepts(value) {
            return Err(LexiconLoadError::OutOfRange {
                table: self.name.clone(),
                spelling,
                value,
                kind: self.kind,
            });
        }

        match self.get(&spelling) {
            Some(existing) if existing == value => {},
            Some(existing) => {
                return Err(LexiconLoadError::Conflict {
                    table: self.name.clone(),
                    spelling,
                    first: existing,
                    second: value,
                });
            },
            None => self.entries.push((spelling, value)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), LexiconLoadError> {
        if self.entries.is_empty() {
            return Err(LexiconLoadError::EmptyTable {
                table: self.name.clone(),
            });
        }

        if self.kind == TableKind::Digit {
            for digit in 1..=9 {
                if !self.entries.iter().any(|(_, v)| *v == digit) {
                    return Err(LexiconLoadError::MissingDigit {
                        table: self.name.clone(),
                        digit,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn get(&self, spelling: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(s, _)| s == spelling)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.get(spelling).is_some()
    }

    /// All spellings of a value, in file order
    pub fn spellings_of(&self, value: u64) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, v)| *v == value)
            .map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
