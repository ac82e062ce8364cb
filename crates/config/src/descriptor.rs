//! Language descriptors
//!
//! A descriptor (`language.yaml`) names the TSV tables of one language and
//! lists its scale words, connector words and sign words. Loading resolves
//! every table into an immutable [`LanguageLexicon`].

use indic_itn_core::{normalize_phrase, Language, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::lexicon::{LexiconLoadError, SymbolTable, TableKind};

pub const DESCRIPTOR_FILE: &str = "language.yaml";

fn default_sign_words() -> Vec<String> {
    vec!["minus".to_string()]
}

/// Raw `language.yaml` contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDescriptor {
    pub language: Language,
    pub tables: TableFiles,
    /// Scale spellings per tier; every tier needs at least one
    pub scales: BTreeMap<Tier, Vec<String>>,
    /// Words such as "and" that may sit between tiers
    #[serde(default)]
    pub connectors: Vec<String>,
    #[serde(default = "default_sign_words")]
    pub sign_words: Vec<String>,
    #[serde(default)]
    pub fused: Option<FusedFiles>,
}

/// Table files of the place-value grammar, relative to the descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFiles {
    pub zero: String,
    pub digit: String,
    #[serde(default)]
    pub tens: Option<String>,
    #[serde(default)]
    pub ties: Option<String>,
    #[serde(default)]
    pub teens: Option<String>,
    #[serde(default)]
    pub multiples: Option<String>,
    #[serde(default)]
    pub exceptions: Option<String>,
}

/// Table files and affixes of the fused native grammar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FusedFiles {
    pub digit: String,
    pub tens: String,
    pub hundred_stems: String,
    pub hundred_suffixes: Vec<String>,
    #[serde(default)]
    pub hundred_words: Option<String>,
    /// Round hundreds spoken as one word ("ஐநூறு")
    #[serde(default)]
    pub round_hundreds: Option<String>,
    pub thousand_stems: String,
    pub thousand_suffixes: Vec<String>,
    pub lakh_counts: String,
    pub lakh_words: Vec<String>,
    pub crore_counts: String,
    pub crore_words: Vec<String>,
    #[serde(default)]
    pub standalone: Option<String>,
}

impl LanguageDescriptor {
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, LexiconLoadError> {
        serde_yaml::from_str(content).map_err(|e| LexiconLoadError::Descriptor {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, LexiconLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(path, &content)
    }
}

/// Spelling → tier mapping for scale words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleLexicon {
    tiers: BTreeMap<Tier, Vec<String>>,
}

impl ScaleLexicon {
    pub fn new(tiers: BTreeMap<Tier, Vec<String>>) -> Result<Self, LexiconLoadError> {
        let mut normalized = BTreeMap::new();
        for tier in Tier::DESCENDING {
            let spellings: Vec<String> = tiers
                .get(&tier)
                .map(|words| {
                    words
                        .iter()
                        .map(|w| normalize_phrase(w))
                        .filter(|w| !w.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            if spellings.is_empty() {
                return Err(LexiconLoadError::MissingScale { tier });
            }
            normalized.insert(tier, spellings);
        }
        Ok(Self { tiers: normalized })
    }

    /// Spellings of one tier, in declaration order
    pub fn spellings(&self, tier: Tier) -> &[String] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tier_of(&self, spelling: &str) -> Option<Tier> {
        self.entries()
            .find(|(s, _)| *s == spelling)
            .map(|(_, tier)| tier)
    }

    /// All (spelling, tier) pairs, highest tier first
    pub fn entries(&self) -> impl Iterator<Item = (&str, Tier)> {
        self.tiers
            .iter()
            .rev()
            .flat_map(|(tier, words)| words.iter().map(move |w| (w.as_str(), *tier)))
    }

    /// Scale words as a whole-value table (e.g. "हजार" → 1000)
    pub fn to_table(&self, name: &str) -> Result<SymbolTable, LexiconLoadError> {
        SymbolTable::from_entries(
            name,
            TableKind::Whole,
            self.entries().map(|(s, tier)| (s, tier.multiplier())),
        )
    }
}

/// Resolved fused native tables (see [`FusedFiles`])
#[derive(Debug, Clone)]
pub struct FusedLexicon {
    pub digit: SymbolTable,
    pub tens: SymbolTable,
    pub hundred_stems: SymbolTable,
    pub hundred_suffixes: Vec<String>,
    pub hundred_words: Option<SymbolTable>,
    pub round_hundreds: Option<SymbolTable>,
    pub thousand_stems: SymbolTable,
    pub thousand_suffixes: Vec<String>,
    pub lakh_counts: SymbolTable,
    pub lakh_words: Vec<String>,
    pub crore_counts: SymbolTable,
    pub crore_words: Vec<String>,
    pub standalone: Option<SymbolTable>,
}

/// Everything the grammar builder needs for one language
///
/// Populated once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct LanguageLexicon {
    pub language: Language,
    pub zero: SymbolTable,
    pub digit: SymbolTable,
    pub tens: Option<SymbolTable>,
    pub ties: Option<SymbolTable>,
    pub teens: Option<SymbolTable>,
    pub multiples: Option<SymbolTable>,
    pub exceptions: Option<SymbolTable>,
    pub scales: ScaleLexicon,
    pub connectors: Vec<String>,
    pub sign_words: Vec<String>,
    pub fused: Option<FusedLexicon>,
}

impl LanguageLexicon {
    /// Load `{root}/{code}/language.yaml` and its tables
    pub fn load(root: &Path, language: Language) -> Result<Self, LexiconLoadError> {
        let dir = root.join(language.code());
        let lexicon = Self::load_dir(&dir)?;
        if lexicon.language != language {
            return Err(LexiconLoadError::LanguageMismatch {
                path: dir.join(DESCRIPTOR_FILE),
                expected: language,
                found: lexicon.language,
            });
        }
        Ok(lexicon)
    }

    /// Load a lexicon directory regardless of its name
    pub fn load_dir(dir: &Path) -> Result<Self, LexiconLoadError> {
        let descriptor_path = dir.join(DESCRIPTOR_FILE);
        let descriptor = LanguageDescriptor::load(&descriptor_path)?;
        Self::resolve(dir, descriptor)
    }

    /// Resolve a parsed descriptor against the directory holding its tables
    pub fn resolve(dir: &Path, descriptor: LanguageDescriptor) -> Result<Self, LexiconLoadError> {
        let table = |file: &str, kind: TableKind| SymbolTable::load(&dir.join(file), kind);
        let optional = |file: &Option<String>, kind: TableKind| {
            file.as_deref().map(|f| table(f, kind)).transpose()
        };
        let descriptor_path = dir.join(DESCRIPTOR_FILE);
        let words = |field: &str, list: &[String]| normalize_words(&descriptor_path, field, list);

        let files = &descriptor.tables;
        let zero = table(&files.zero, TableKind::Zero)?;
        let digit = table(&files.digit, TableKind::Digit)?;

        if let Some((spelling, _)) = zero.iter().find(|(s, _)| digit.contains(s)) {
            return Err(LexiconLoadError::ZeroDigitOverlap {
                spelling: spelling.to_string(),
            });
        }

        let fused = match &descriptor.fused {
            Some(f) => Some(FusedLexicon {
                digit: table(&f.digit, TableKind::Digit)?,
                tens: table(&f.tens, TableKind::Tens)?,
                hundred_stems: table(&f.hundred_stems, TableKind::HundredStem)?,
                hundred_suffixes: words("fused.hundred_suffixes", &f.hundred_suffixes)?,
                hundred_words: optional(&f.hundred_words, TableKind::HundredStem)?,
                round_hundreds: optional(&f.round_hundreds, TableKind::RoundHundred)?,
                thousand_stems: table(&f.thousand_stems, TableKind::ThousandStem)?,
                thousand_suffixes: words("fused.thousand_suffixes", &f.thousand_suffixes)?,
                lakh_counts: table(&f.lakh_counts, TableKind::Count)?,
                lakh_words: words("fused.lakh_words", &f.lakh_words)?,
                crore_counts: table(&f.crore_counts, TableKind::Count)?,
                crore_words: words("fused.crore_words", &f.crore_words)?,
                standalone: optional(&f.standalone, TableKind::Whole)?,
            }),
            None => None,
        };

        let lexicon = Self {
            language: descriptor.language,
            zero,
            digit,
            tens: optional(&files.tens, TableKind::Tens)?,
            ties: optional(&files.ties, TableKind::Ties)?,
            teens: optional(&files.teens, TableKind::Teens)?,
            multiples: optional(&files.multiples, TableKind::Whole)?,
            exceptions: optional(&files.exceptions, TableKind::Whole)?,
            scales: ScaleLexicon::new(descriptor.scales.clone())?,
            connectors: normalize_words(&descriptor_path, "connectors", &descriptor.connectors)?,
            sign_words: words("sign_words", &descriptor.sign_words)?,
            fused,
        };

        let script = lexicon.language.script();
        let foreign = lexicon
            .zero
            .iter()
            .chain(lexicon.digit.iter())
            .filter(|(s, _)| s.chars().any(|c| !c.is_ascii() && !script.contains(c)))
            .count();
        if foreign > 0 {
            tracing::warn!(
                language = %lexicon.language,
                script = ?script,
                spellings = foreign,
                "Digit spellings outside the language script"
            );
        }

        tracing::info!(
            language = %lexicon.language,
            digits = lexicon.digit.len(),
            scales = lexicon.scales.entries().count(),
            fused = lexicon.fused.is_some(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }
}

/// Normalize a word list; empty lists are only allowed for connectors
fn normalize_words(
    path: &Path,
    field: &str,
    list: &[String],
) -> Result<Vec<String>, LexiconLoadError> {
    let invalid = |reason: String| LexiconLoadError::Descriptor {
        path: PathBuf::from(path),
        reason,
    };

    let mut out = Vec::with_capacity(list.len());
    for word in list {
        let word = normalize_phrase(word);
        if word.is_empty() {
            return Err(invalid(format!("{field} contains an empty word")));
        }
        if !out.contains(&word) {
            out.push(word);
        }
    }

    if out.is_empty() && field != "connectors" {
        return Err(invalid(format!("{field} must list at least one word")));
    }
    Ok(out)
}
