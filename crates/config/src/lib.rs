//! Configuration management for the cardinal ITN stack
//!
//! Supports loading:
//! - Settings from YAML/TOML files and environment variables (INDIC_ITN prefix)
//! - Per-language lexicons: a `language.yaml` descriptor plus TSV tables
//!
//! # Lexicon layout
//!
//! ```text
//! config/lexicons/{code}/language.yaml  - table files, scale words, connectors
//! config/lexicons/{code}/*.tsv          - spelling<TAB>value tables
//! ```

pub mod descriptor;
pub mod lexicon;
pub mod settings;

pub use descriptor::{FusedLexicon, LanguageDescriptor, LanguageLexicon, ScaleLexicon};
pub use lexicon::{LexiconLoadError, SymbolTable, TableKind};
pub use settings::{
    load_settings, load_settings_from, LexiconSettings, ObservabilityConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::MissingField(key),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
