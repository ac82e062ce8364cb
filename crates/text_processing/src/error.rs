//! Errors raised while building taggers

use indic_itn_config::{ConfigError, LexiconLoadError};
use indic_itn_core::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconLoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid grammar for {language}: {reason}")]
    InvalidGrammar { language: Language, reason: String },
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
