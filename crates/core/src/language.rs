//! Language definitions for the Indic ITN grammars
//!
//! Each language maps to an ISO code, which is also the name of its lexicon
//! directory under the configured lexicon root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages with cardinal lexicons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    Marathi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Bengali,
    Gujarati,
    Punjabi,
    Odia,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Self::Hindi,
        Self::Marathi,
        Self::Tamil,
        Self::Telugu,
        Self::Kannada,
        Self::Malayalam,
        Self::Bengali,
        Self::Gujarati,
        Self::Punjabi,
        Self::Odia,
    ];

    /// ISO 639-1 code, also the lexicon directory name
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Marathi => "mr",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Bengali => "bn",
            Self::Gujarati => "gu",
            Self::Punjabi => "pa",
            Self::Odia => "or",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Bengali => "Bengali",
            Self::Gujarati => "Gujarati",
            Self::Punjabi => "Punjabi",
            Self::Odia => "Odia",
        }
    }

    /// Native script of the language
    pub fn script(&self) -> Script {
        match self {
            Self::Hindi | Self::Marathi => Script::Devanagari,
            Self::Tamil => Script::Tamil,
            Self::Telugu => Script::Telugu,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Bengali => Script::Bengali,
            Self::Gujarati => Script::Gujarati,
            Self::Punjabi => Script::Gurmukhi,
            Self::Odia => Script::Odia,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a language code or name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts either the ISO code (`mr`) or the English name (`marathi`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == needle || lang.name().to_lowercase() == needle)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Writing systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Bengali,
    Gujarati,
    Gurmukhi,
    Odia,
}

impl Script {
    /// Unicode block covering the script
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Devanagari => (0x0900, 0x097F),
            Self::Bengali => (0x0980, 0x09FF),
            Self::Gurmukhi => (0x0A00, 0x0A7F),
            Self::Gujarati => (0x0A80, 0x0AFF),
            Self::Odia => (0x0B00, 0x0B7F),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Telugu => (0x0C00, 0x0C7F),
            Self::Kannada => (0x0C80, 0x0CFF),
            Self::Malayalam => (0x0D00, 0x0D7F),
        }
    }

    /// Whether a character belongs to this script's block
    pub fn contains(&self, c: char) -> bool {
        let (start, end) = self.unicode_range();
        (start..=end).contains(&(c as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_and_name() {
        assert_eq!("mr".parse::<Language>().unwrap(), Language::Marathi);
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let lang: Language = serde_json::from_str("\"marathi\"").unwrap();
        assert_eq!(lang, Language::Marathi);
        assert_eq!(serde_json::to_string(&Language::Tamil).unwrap(), "\"tamil\"");
    }

    #[test]
    fn test_script_membership() {
        assert!(Language::Marathi.script().contains('क'));
        assert!(Language::Tamil.script().contains('க'));
        assert!(!Language::Tamil.script().contains('क'));
    }
}
