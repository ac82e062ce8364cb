//! Inverse text normalization of spoken cardinal numbers
//!
//! This crate turns verbalized cardinals from speech-recognition transcripts
//! into tagged digit tokens:
//! - **Grammar**: a small weighted grammar algebra with best-path search
//! - **Cardinal**: per-language grammar built from lexicon tables
//!   (crore / lakh / thousand / hundred tiers, fused native forms)
//! - **Registry**: one tagger per configured language
//!
//! # Example
//!
//! ```ignore
//! use indic_itn_config::load_settings;
//! use indic_itn_core::Language;
//! use indic_itn_text_processing::CardinalRegistry;
//!
//! let settings = load_settings(None)?;
//! let registry = CardinalRegistry::from_settings(&settings, Path::new("."))?;
//!
//! // cardinal { integer: "1230" }
//! let tagged = registry.apply(Language::Marathi, "एक हजार दोन शे तीस");
//! ```

pub mod cardinal;
pub mod grammar;

mod error;
mod registry;

pub use cardinal::CardinalTagger;
pub use error::{Result, TextProcessingError};
pub use grammar::{Candidate, Grammar, Reading, Weight};
pub use registry::CardinalRegistry;
