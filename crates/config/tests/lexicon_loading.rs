//! Integration tests for settings and lexicon loading
//!
//! Uses the lexicons shipped in the workspace `config/` directory plus
//! throwaway directories for the failure cases.

use std::fs;
use std::path::{Path, PathBuf};

use indic_itn_config::{
    load_settings_from, LanguageLexicon, LexiconLoadError, TableKind,
};
use indic_itn_core::{Language, Tier};

fn workspace_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config")
}

fn lexicon_root() -> PathBuf {
    workspace_config().join("lexicons")
}

const DIGITS: &str = "one\t1\ntwo\t2\nthree\t3\nfour\t4\nfive\t5\nsix\t6\nseven\t7\neight\t8\nnine\t9\n";

const DESCRIPTOR: &str = r#"
language: hindi
tables:
  zero: zero.tsv
  digit: digit.tsv
scales:
  hundred: [hundred]
  thousand: [thousand]
  lakh: [lakh]
  crore: [crore]
connectors: [and]
"#;

fn write_lexicon(dir: &Path, descriptor: &str, zero: &str) {
    fs::write(dir.join("language.yaml"), descriptor).unwrap();
    fs::write(dir.join("digit.tsv"), DIGITS).unwrap();
    fs::write(dir.join("zero.tsv"), zero).unwrap();
}

#[test]
fn test_shipped_settings_load() {
    let settings = load_settings_from(&workspace_config(), None).unwrap();
    assert!(settings.lexicon.languages.contains(&Language::Marathi));
    assert!(settings.lexicon.languages.contains(&Language::Tamil));
    assert_eq!(settings.observability.log_level, "info");
}

#[test]
fn test_marathi_lexicon() {
    let lexicon = LanguageLexicon::load(&lexicon_root(), Language::Marathi).unwrap();

    assert_eq!(lexicon.language, Language::Marathi);
    assert_eq!(lexicon.zero.get("शून्य"), Some(0));
    assert_eq!(lexicon.digit.get("पाच"), Some(5));
    assert_eq!(lexicon.tens.as_ref().and_then(|t| t.get("बावीस")), Some(22));
    assert_eq!(lexicon.tens.as_ref().map(|t| t.len()), Some(90));
    assert_eq!(lexicon.scales.tier_of("हजार"), Some(Tier::Thousand));
    assert_eq!(lexicon.scales.tier_of("कोटी"), Some(Tier::Crore));
    assert_eq!(lexicon.connectors, vec!["एंड".to_string()]);
    assert!(lexicon.sign_words.contains(&"minus".to_string()));
    assert!(lexicon.fused.is_none());
}

#[test]
fn test_tamil_lexicon_has_fused_tables() {
    let lexicon = LanguageLexicon::load(&lexicon_root(), Language::Tamil).unwrap();
    let fused = lexicon.fused.expect("tamil declares fused tables");

    assert_eq!(fused.digit.get("மூன்று"), Some(3));
    assert_eq!(fused.tens.get("இருபத்தி ஒன்று"), Some(21));
    assert_eq!(fused.tens.len(), 90);
    assert_eq!(fused.hundred_stems.kind(), TableKind::HundredStem);
    assert_eq!(fused.thousand_stems.get("இரண்டா"), Some(2));
    assert_eq!(
        fused.round_hundreds.as_ref().and_then(|t| t.get("தொள்ளாயிரம்")),
        Some(900)
    );
    assert!(fused.lakh_words.contains(&"லட்சம்".to_string()));
    assert_eq!(
        fused.standalone.as_ref().and_then(|t| t.get("ஒரு லட்சம்")),
        Some(100_000)
    );
    assert_eq!(
        lexicon.exceptions.as_ref().and_then(|t| t.get("ஓராயிரம்")),
        Some(1000)
    );
}

#[test]
fn test_missing_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("language.yaml"), DESCRIPTOR).unwrap();
    fs::write(dir.path().join("digit.tsv"), DIGITS).unwrap();

    let err = LanguageLexicon::load_dir(dir.path()).unwrap_err();
    match err {
        LexiconLoadError::Io { path, .. } => assert!(path.ends_with("zero.tsv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_and_digit_must_be_disjoint() {
    let dir = tempfile::tempdir().unwrap();
    write_lexicon(dir.path(), DESCRIPTOR, "zero\t0\none\t0\n");

    let err = LanguageLexicon::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconLoadError::ZeroDigitOverlap { ref spelling } if spelling == "one"));
}

#[test]
fn test_language_mismatch() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("mr");
    fs::create_dir(&dir).unwrap();
    write_lexicon(&dir, DESCRIPTOR, "zero\t0\n");

    let err = LanguageLexicon::load(root.path(), Language::Marathi).unwrap_err();
    assert!(matches!(
        err,
        LexiconLoadError::LanguageMismatch {
            expected: Language::Marathi,
            found: Language::Hindi,
            ..
        }
    ));
}

#[test]
fn test_missing_scale_tier() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = DESCRIPTOR.replace("  crore: [crore]\n", "");
    write_lexicon(dir.path(), &descriptor, "zero\t0\n");

    let err = LanguageLexicon::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LexiconLoadError::MissingScale { tier: Tier::Crore }));
}

#[test]
fn test_minimal_lexicon_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_lexicon(dir.path(), DESCRIPTOR, "zero\t0\n");

    let lexicon = LanguageLexicon::load_dir(dir.path()).unwrap();
    assert_eq!(lexicon.language, Language::Hindi);
    assert!(lexicon.tens.is_none());
    assert!(lexicon.ties.is_none());
    assert_eq!(lexicon.sign_words, vec!["minus".to_string()]);
}
