//! Atomic recognizers over one language's tables

use indic_itn_config::{LanguageLexicon, ScaleLexicon, SymbolTable};
use indic_itn_core::Tier;
use std::sync::Arc;

use crate::grammar::{accept, concat, delete_space, lookup, union, Grammar};
use crate::Result;

/// Leaf grammars shared by the components
#[derive(Debug, Clone)]
pub struct Atoms {
    pub zero: Grammar,
    pub digit: Grammar,
    /// Native two-digit words, 10–99
    pub tens: Option<Grammar>,
    /// Loanword round tens, 20–90
    pub ties: Option<Grammar>,
    /// Loanword teens, 10–19
    pub teens: Option<Grammar>,
    pub multiples: Option<Grammar>,
    pub exceptions: Option<Grammar>,
    /// Scale words on their own ("हजार" → 1000)
    pub bare_scales: Grammar,
    connectors: Option<Grammar>,
    scales: ScaleLexicon,
}

pub(crate) fn table(t: &SymbolTable) -> Grammar {
    lookup(Arc::new(t.clone()))
}

impl Atoms {
    pub fn new(lexicon: &LanguageLexicon) -> Result<Self> {
        let connectors = if lexicon.connectors.is_empty() {
            None
        } else {
            Some(accept(lexicon.connectors.iter().cloned()))
        };

        Ok(Self {
            zero: table(&lexicon.zero),
            digit: table(&lexicon.digit),
            tens: lexicon.tens.as_ref().map(table),
            ties: lexicon.ties.as_ref().map(table),
            teens: lexicon.teens.as_ref().map(table),
            multiples: lexicon.multiples.as_ref().map(table),
            exceptions: lexicon.exceptions.as_ref().map(table),
            bare_scales: lookup(Arc::new(lexicon.scales.to_table("scales")?)),
            connectors,
            scales: lexicon.scales.clone(),
        })
    }

    /// Any spelling of the tier's scale word, consumed without output
    pub fn scale(&self, tier: Tier) -> Grammar {
        accept(self.scales.spellings(tier).iter().cloned())
    }

    /// Space after a hundred word, optionally around a connector
    pub fn gap(&self) -> Grammar {
        match &self.connectors {
            Some(connectors) => union([
                concat([delete_space(), connectors.clone(), delete_space()]),
                delete_space(),
            ]),
            None => delete_space(),
        }
    }

    /// Space between tiers, optionally around a connector
    pub fn separator(&self) -> Grammar {
        match &self.connectors {
            Some(connectors) => union([
                delete_space(),
                concat([delete_space(), connectors.clone(), delete_space()]),
            ]),
            None => delete_space(),
        }
    }
}
