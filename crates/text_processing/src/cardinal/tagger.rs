//! Cardinal tagger: sign prefix plus the composed numeral grammar

use indic_itn_config::LanguageLexicon;
use indic_itn_core::{normalize_phrase, CardinalToken, Language, Tagger};
use std::path::Path;

use super::composer::compose;
use crate::grammar::{accept, concat, space, Grammar};
use crate::Result;

/// Compiled cardinal recognizer for one language
///
/// Immutable once built; share it behind an `Arc` for concurrent use.
#[derive(Debug, Clone)]
pub struct CardinalTagger {
    language: Language,
    grammar: Grammar,
}

impl CardinalTagger {
    /// Build the tagger from an already loaded lexicon
    pub fn build(lexicon: &LanguageLexicon) -> Result<Self> {
        let sign = concat([accept(lexicon.sign_words.iter().cloned()), space()]).negate();
        let grammar = sign.optional().then(compose(lexicon)?);

        tracing::debug!(
            language = %lexicon.language,
            rules = grammar.rule_count(),
            digits = lexicon.digit.len(),
            tens = lexicon.tens.as_ref().map_or(0, |t| t.len()),
            fused = lexicon.fused.is_some(),
            "Composed cardinal grammar"
        );
        tracing::info!(language = %lexicon.language, "Cardinal tagger ready");

        Ok(Self {
            language: lexicon.language,
            grammar,
        })
    }

    /// Load `{root}/{code}` and build
    pub fn load(root: &Path, language: Language) -> Result<Self> {
        let lexicon = LanguageLexicon::load(root, language)?;
        Self::build(&lexicon)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}

impl Tagger for CardinalTagger {
    fn name(&self) -> &str {
        "cardinal"
    }

    fn language(&self) -> Language {
        self.language
    }

    fn tag(&self, phrase: &str) -> Option<CardinalToken> {
        let normalized = normalize_phrase(phrase);
        if normalized.is_empty() {
            return None;
        }

        let best = self.grammar.best_path(&normalized);
        match &best {
            Some(candidate) => tracing::trace!(
                language = %self.language,
                phrase = %normalized,
                value = candidate.reading.value,
                weight = %candidate.weight,
                "Tagged cardinal"
            ),
            None => tracing::trace!(language = %self.language, phrase = %normalized, "No cardinal reading"),
        }

        best.map(|c| CardinalToken::new(c.reading.value, c.reading.negative))
    }
}
