//! Configuration management for Scrub.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Scrub uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (the file itself is optional)
//! - `SCRUB_*` environment variable overrides
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [deidentification]
//! strategy = "mask"
//! # pattern_library = "patterns/phi_patterns.toml"
//!
//! [ner]
//! backend = "lexicon"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, DeidentificationConfig, LoggingConfig, NerConfig, ScrubConfig,
};
