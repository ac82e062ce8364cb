//! Whole-phrase cardinal grammar

use indic_itn_config::LanguageLexicon;
use indic_itn_core::Tier;

use super::atoms::{table, Atoms};
use super::components::{fused_tiered, tiered};
use super::EXCEPTION;
use crate::grammar::{concat, delete_space, union, Grammar};
use crate::{Result, TextProcessingError};

/// Union of every reading a cardinal phrase may take
///
/// In declaration order: the tiered reading, the tiered reading scaled by a
/// trailing crore or lakh word ("चार हजार कोटी"), bare scale words, zero,
/// fixed multiples, exceptions, and the fused native family.
pub fn compose(lexicon: &LanguageLexicon) -> Result<Grammar> {
    check_disjoint(lexicon)?;

    let atoms = Atoms::new(lexicon)?;
    let tiered = tiered(&atoms);

    let mut alternatives = vec![
        tiered.clone(),
        concat([
            tiered.clone().times(Tier::Crore.multiplier()),
            delete_space(),
            atoms.scale(Tier::Crore),
        ]),
        concat([
            tiered.times(Tier::Lakh.multiplier()),
            delete_space(),
            atoms.scale(Tier::Lakh),
        ]),
        atoms.bare_scales.clone(),
        atoms.zero.clone(),
    ];
    alternatives.extend(atoms.multiples.clone());
    alternatives.extend(atoms.exceptions.clone().map(|g| g.weighted(EXCEPTION)));

    if let Some(fused) = &lexicon.fused {
        alternatives.push(fused_tiered(fused));
        alternatives.extend(fused.standalone.as_ref().map(table));
    }

    Ok(union(alternatives))
}

/// Sign and connector words must not double as numerals or scale words
fn check_disjoint(lexicon: &LanguageLexicon) -> Result<()> {
    let mut tables = vec![&lexicon.zero, &lexicon.digit];
    tables.extend(
        [&lexicon.tens, &lexicon.ties, &lexicon.teens]
            .into_iter()
            .flatten(),
    );
    if let Some(fused) = &lexicon.fused {
        tables.extend([&fused.digit, &fused.tens]);
    }

    let function_words = lexicon
        .sign_words
        .iter()
        .map(|w| ("sign word", w))
        .chain(lexicon.connectors.iter().map(|w| ("connector", w)));

    for (role, word) in function_words {
        let clash = if tables.iter().any(|t| t.contains(word)) {
            Some("numeral")
        } else if lexicon.scales.tier_of(word).is_some() {
            Some("scale word")
        } else {
            None
        };

        if let Some(kind) = clash {
            return Err(TextProcessingError::InvalidGrammar {
                language: lexicon.language,
                reason: format!("{role} '{word}' is also a {kind}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardinal::fixtures;
    use indic_itn_config::{SymbolTable, TableKind};

    fn value(g: &Grammar, phrase: &str) -> Option<u64> {
        g.best_path(phrase).map(|c| c.reading.value)
    }

    #[test]
    fn test_special_cases() {
        let g = compose(&fixtures::english()).unwrap();
        assert_eq!(value(&g, "zero"), Some(0));
        assert_eq!(value(&g, "crore"), Some(10_000_000));
        assert_eq!(value(&g, "dozen"), Some(12));
        assert_eq!(value(&g, "grand"), Some(1000));
        assert_eq!(value(&g, "zero zero"), None);
    }

    #[test]
    fn test_scaled_tiered_reading() {
        let g = compose(&fixtures::english()).unwrap();
        assert_eq!(value(&g, "four thousand crore"), Some(40_000_000_000));
        assert_eq!(value(&g, "two crore"), Some(20_000_000));
        assert_eq!(value(&g, "five hundred lakh"), Some(50_000_000));
    }

    #[test]
    fn test_exception_overrides_regular_reading() {
        let mut lexicon = fixtures::english();
        lexicon.exceptions = Some(
            SymbolTable::from_entries("exceptions", TableKind::Whole, [("one hundred", 111)])
                .unwrap(),
        );
        let g = compose(&lexicon).unwrap();
        assert_eq!(value(&g, "one hundred"), Some(111));
        assert_eq!(value(&g, "two hundred"), Some(200));
    }

    #[test]
    fn test_sign_word_clashing_with_digit() {
        let mut lexicon = fixtures::english();
        lexicon.sign_words = vec!["one".to_string()];
        let err = compose(&lexicon).unwrap_err();
        assert!(matches!(err, TextProcessingError::InvalidGrammar { .. }));
    }

    #[test]
    fn test_connector_clashing_with_tens_or_scale() {
        for connector in ["twenty", "seventeen", "lakh"] {
            let mut lexicon = fixtures::english();
            lexicon.connectors = vec![connector.to_string()];
            let err = compose(&lexicon).unwrap_err();
            assert!(
                matches!(err, TextProcessingError::InvalidGrammar { .. }),
                "connector: {connector}"
            );
        }

        let mut lexicon = fixtures::english();
        lexicon.connectors = vec!["and".to_string(), "plus".to_string()];
        assert!(compose(&lexicon).is_ok());
    }
}
