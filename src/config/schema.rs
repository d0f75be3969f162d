//! Configuration schema types
//!
//! This module defines the configuration structure for Scrub. Every
//! section has sensible defaults, so a missing configuration file is
//! equivalent to the built-in behavior.

use crate::deid::renderer::Strategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Scrub configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScrubConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// De-identification settings
    #[serde(default)]
    pub deidentification: DeidentificationConfig,

    /// Entity recognizer settings
    #[serde(default)]
    pub ner: NerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScrubConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.deidentification.validate()?;
        self.ner.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// De-identification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeidentificationConfig {
    /// Default rewrite strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Path to a pattern library TOML file; the embedded defaults are used
    /// when unset
    pub pattern_library: Option<PathBuf>,
}

impl DeidentificationConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Entity recognizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerConfig {
    /// Recognizer backend name
    #[serde(default = "default_ner_backend")]
    pub backend: String,
}

fn default_ner_backend() -> String {
    "lexicon".to_string()
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            backend: default_ner_backend(),
        }
    }
}

impl NerConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_backends = ["lexicon"];
        if !valid_backends.contains(&self.backend.as_str()) {
            return Err(format!(
                "Invalid ner backend '{}'. Must be one of: {}",
                self.backend,
                valid_backends.join(", ")
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Log directory for file logging
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}
