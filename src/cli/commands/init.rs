//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "scrub.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: scrub validate-config");
                println!("  3. Run de-identification: scrub deidentify --text '...'");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Scrub Configuration File
# Clinical Text De-identification Tool

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[deidentification]
# Rewrite strategy: "mask" for [LABEL] tokens, "surrogate" for [LABEL_001]
strategy = "mask"

# Optional: path to a custom pattern library; the embedded defaults cover
# dates, phone numbers, emails, MRNs and SSNs
# pattern_library = "patterns/phi_patterns.toml"

[ner]
# Entity recognizer backend
backend = "lexicon"

[logging]
# Enable JSON file logging with rotation
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
