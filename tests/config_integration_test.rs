//! Integration tests for configuration loading

use scrub::config::{load_config, load_config_or_default};
use scrub::deid::Strategy;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_config_round_trip() {
    let file = write_config(
        r#"
[application]
log_level = "debug"

[deidentification]
strategy = "surrogate"

[ner]
backend = "lexicon"

[logging]
local_enabled = true
local_path = "./logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.deidentification.strategy, Strategy::Surrogate);
    assert_eq!(config.ner.backend, "lexicon");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.deidentification.strategy, Strategy::Mask);
    assert!(config.deidentification.pattern_library.is_none());
}

#[test]
fn test_partial_config_fills_missing_sections() {
    let file = write_config(
        r#"
[deidentification]
strategy = "surrogate"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.deidentification.strategy, Strategy::Surrogate);
    assert_eq!(config.ner.backend, "lexicon");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_missing_file_is_an_error_for_load_config() {
    assert!(load_config("does/not/exist.toml").is_err());
}

#[test]
fn test_missing_file_defaults_for_load_config_or_default() {
    let config = load_config_or_default("does/not/exist.toml").unwrap();
    assert_eq!(config.application.log_level, "info");
}

#[test]
fn test_invalid_strategy_rejected_at_parse() {
    let file = write_config(
        r#"
[deidentification]
strategy = "tokenize"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invalid_backend_rejected_at_validation() {
    let file = write_config(
        r#"
[ner]
backend = "transformer"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_pattern_library_path_validated() {
    let file = write_config(
        r#"
[deidentification]
pattern_library = "missing/patterns.toml"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_pattern_library_accepts_existing_toml() {
    let patterns = write_config(
        r#"
[patterns.room]
patterns = ['\bRoom \d+\b']
label = "LOCATION"
"#,
    );
    // NamedTempFile paths have no .toml extension, so copy to one that does
    let dir = tempfile::tempdir().unwrap();
    let pattern_path = dir.path().join("custom_patterns.toml");
    std::fs::copy(patterns.path(), &pattern_path).unwrap();

    let file = write_config(&format!(
        "[deidentification]\npattern_library = \"{}\"\n",
        pattern_path.display()
    ));
    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.deidentification.pattern_library.as_deref(),
        Some(pattern_path.as_path())
    );
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("SCRUB_IT_LOG_LEVEL", "warn");
    let file = write_config(
        r#"
[application]
log_level = "${SCRUB_IT_LOG_LEVEL}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    std::env::remove_var("SCRUB_IT_LOG_LEVEL");
}
