//! Cardinal number tagger
//!
//! Builds one weighted grammar per language from its lexicon:
//!
//! 1. atomic recognizers over the symbol tables ([`atoms`])
//! 2. hundred and scale-tier components ([`components`])
//! 3. the whole-phrase union of tiered readings and special cases ([`composer`])
//! 4. the sign prefix and token output ([`CardinalTagger`])
//!
//! Overlapping readings are settled by integer weights; see the constants
//! below.

pub mod atoms;
pub mod components;
pub mod composer;
mod tagger;

#[cfg(test)]
pub(crate) mod fixtures;

pub use tagger::CardinalTagger;

use crate::grammar::Weight;

/// "thousand" with no count in front reads as one thousand
pub const IMPLIED_ONE: Weight = Weight(-1);
/// Filler for a tier the phrase skips
pub const ABSENT_TIER: Weight = Weight(1);
/// Phrase that ends on a scale word, with nothing in the hundred slot
pub const EMPTY_HUNDRED: Weight = Weight(-1);
/// Exception entries win whenever they match the whole phrase
pub const EXCEPTION: Weight = Weight(-10);
