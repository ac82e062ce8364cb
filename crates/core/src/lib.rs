//! Core types and traits for Indic inverse text normalization
//!
//! This crate provides the foundational types shared by the other crates:
//! - Language and script definitions for the supported Indic languages
//! - Magnitude tiers of the South-Asian numbering system (hundred … crore)
//! - The tagged cardinal token emitted by the grammar
//! - Phrase normalization applied to both lexicon spellings and input
//! - The `Tagger` trait implemented by number-class taggers

pub mod language;
pub mod normalize;
pub mod tier;
pub mod token;
pub mod traits;

pub use language::{Language, Script, UnknownLanguage};
pub use normalize::normalize_phrase;
pub use tier::Tier;
pub use token::CardinalToken;
pub use traits::Tagger;
