//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubConfig;
use crate::deid::renderer::Strategy;
use crate::domain::errors::ScrubError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScrubConfig
/// 4. Applies environment variable overrides (SCRUB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use scrub::config::load_config;
///
/// let config = load_config("scrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ScrubConfig = toml::from_str(&contents)
        .map_err(|e| ScrubError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ScrubError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration from a file if it exists, falling back to defaults
///
/// Environment variable overrides are applied in both cases, so `SCRUB_*`
/// variables work without a configuration file on disk.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    let mut config = ScrubConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        ScrubError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScrubError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SCRUB_* prefix
///
/// Environment variables follow the pattern: SCRUB_<SECTION>_<KEY>
/// For example: SCRUB_APPLICATION_LOG_LEVEL, SCRUB_NER_BACKEND
fn apply_env_overrides(config: &mut ScrubConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SCRUB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // De-identification overrides
    if let Ok(val) = std::env::var("SCRUB_DEIDENTIFICATION_STRATEGY") {
        config.deidentification.strategy = Strategy::from_str(&val)?;
    }
    if let Ok(val) = std::env::var("SCRUB_DEIDENTIFICATION_PATTERN_LIBRARY") {
        config.deidentification.pattern_library = Some(val.into());
    }

    // NER overrides
    if let Ok(val) = std::env::var("SCRUB_NER_BACKEND") {
        config.ner.backend = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SCRUB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SCRUB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SCRUB_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SCRUB_TEST_VAR", "test_value");
        let input = "pattern_library = \"${SCRUB_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "pattern_library = \"test_value\"\n");
        std::env::remove_var("SCRUB_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SCRUB_MISSING_VAR");
        let input = "pattern_library = \"${SCRUB_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("SCRUB_COMMENTED_VAR");
        let input = "# pattern_library = \"${SCRUB_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[deidentification]
strategy = "surrogate"

[ner]
backend = "lexicon"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.deidentification.strategy, Strategy::Surrogate);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let toml_content = r#"
[application]
log_level = "shout"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
