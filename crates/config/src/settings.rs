//! Main settings module

use config::{Config, Environment, File};
use indic_itn_core::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Where lexicons live and which languages to build
    #[serde(default)]
    pub lexicon: LexiconSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSettings {
    /// Directory holding one sub-directory per language code
    #[serde(default = "default_lexicon_root")]
    pub root: String,

    /// Languages to build at startup
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
}

fn default_lexicon_root() -> String {
    "config/lexicons".to_string()
}

fn default_languages() -> Vec<Language> {
    vec![Language::Marathi, Language::Tamil]
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self {
            root: default_lexicon_root(),
            languages: default_languages(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_lexicon()?;
        self.validate_observability()?;
        Ok(())
    }

    fn validate_lexicon(&self) -> Result<(), ConfigError> {
        if self.lexicon.root.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lexicon.root".to_string(),
                message: "Lexicon root cannot be empty".to_string(),
            });
        }

        if self.lexicon.languages.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lexicon.languages".to_string(),
                message: "At least one language must be configured".to_string(),
            });
        }

        for (i, lang) in self.lexicon.languages.iter().enumerate() {
            if self.lexicon.languages[..i].contains(lang) {
                return Err(ConfigError::InvalidValue {
                    field: "lexicon.languages".to_string(),
                    message: format!("{} is listed more than once", lang),
                });
            }
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Must be one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }

    /// Lexicon root, resolved against `base` when relative
    pub fn lexicon_root(&self, base: &Path) -> PathBuf {
        let root = Path::new(&self.lexicon.root);
        if root.is_absolute() {
            root.to_path_buf()
        } else {
            base.join(root)
        }
    }
}

/// Load settings from the `config/` directory and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (INDIC_ITN__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Same as [`load_settings`] with an explicit configuration directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    if !config_dir.is_dir() {
        return Err(ConfigError::FileNotFound(config_dir.display().to_string()));
    }

    let mut builder = Config::builder();

    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("INDIC_ITN")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("lexicon.languages")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        languages = ?settings.lexicon.languages,
        root = %settings.lexicon.root,
        "Settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.lexicon.root, "config/lexicons");
        assert_eq!(
            settings.lexicon.languages,
            vec![Language::Marathi, Language::Tamil]
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_lexicon_validation() {
        let mut settings = Settings::default();

        settings.lexicon.languages.clear();
        assert!(settings.validate_lexicon().is_err());

        settings.lexicon.languages = vec![Language::Tamil, Language::Tamil];
        assert!(settings.validate_lexicon().is_err());

        settings.lexicon.languages = vec![Language::Tamil];
        settings.lexicon.root = "  ".to_string();
        assert!(settings.validate_lexicon().is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();
        assert!(settings.validate_observability().is_err());

        settings.observability.log_level = "DEBUG".to_string();
        assert!(settings.validate_observability().is_ok());
    }

    #[test]
    fn test_lexicon_root_resolution() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.lexicon_root(Path::new("/srv/itn")),
            PathBuf::from("/srv/itn/config/lexicons")
        );

        settings.lexicon.root = "/opt/lexicons".to_string();
        assert_eq!(
            settings.lexicon_root(Path::new("/srv/itn")),
            PathBuf::from("/opt/lexicons")
        );
    }

    #[test]
    fn test_missing_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let err = load_settings_from(&missing, None).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(path) if path.ends_with("absent")));

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.lexicon.root, "config/lexicons");
    }
}
