//! Per-language tagger registry

use indic_itn_config::Settings;
use indic_itn_core::{Language, Tagger};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::cardinal::CardinalTagger;
use crate::Result;

/// Cardinal taggers for every configured language, built eagerly
#[derive(Clone, Default)]
pub struct CardinalRegistry {
    taggers: BTreeMap<Language, Arc<CardinalTagger>>,
}

impl CardinalRegistry {
    /// Load and build every language listed in `settings`
    ///
    /// A relative lexicon root is resolved against `base`. Any failing
    /// language aborts construction.
    pub fn from_settings(settings: &Settings, base: &Path) -> Result<Self> {
        let root = settings.lexicon_root(base);
        let mut registry = Self::default();

        for &language in &settings.lexicon.languages {
            let tagger = CardinalTagger::load(&root, language)?;
            registry.insert(tagger);
        }

        tracing::info!(
            languages = registry.taggers.len(),
            root = %root.display(),
            "Cardinal registry built"
        );
        Ok(registry)
    }

    /// Add or replace the tagger for its language
    pub fn insert(&mut self, tagger: CardinalTagger) {
        self.taggers.insert(tagger.language(), Arc::new(tagger));
    }

    pub fn get(&self, language: Language) -> Option<Arc<dyn Tagger>> {
        self.taggers
            .get(&language)
            .map(|t| Arc::clone(t) as Arc<dyn Tagger>)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.taggers.keys().copied()
    }

    /// Tagged token string, or `None` when the phrase is not a cardinal
    pub fn apply(&self, language: Language, phrase: &str) -> Option<String> {
        self.taggers.get(&language)?.apply(phrase)
    }

    /// Tagged token string, or the phrase unchanged
    pub fn normalize_or_passthrough(&self, language: Language, phrase: &str) -> String {
        self.apply(language, phrase)
            .unwrap_or_else(|| phrase.to_string())
    }
}

impl std::fmt::Debug for CardinalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardinalRegistry")
            .field("languages", &self.taggers.keys().collect::<Vec<_>>())
            .finish()
    }
}
