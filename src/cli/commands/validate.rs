//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Scrub configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Strategy: {}", config.deidentification.strategy);
                match config.deidentification.pattern_library {
                    Some(ref path) => println!("  Pattern Library: {}", path.display()),
                    None => println!("  Pattern Library: (embedded defaults)"),
                }
                println!("  NER Backend: {}", config.ner.backend);
                println!("  File Logging: {}", config.logging.local_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
