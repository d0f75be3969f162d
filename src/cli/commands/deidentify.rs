//! Deidentify command implementation
//!
//! This module implements the `deidentify` command: runs the hybrid
//! pipeline over the input text and prints the rewritten text with an
//! enumerated span listing.

use crate::config::load_config_or_default;
use crate::deid::{DeidPipeline, DeidResult, DetectionReport, Strategy};
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

const SAMPLE_TEXT: &str = "John Smith is a 65-year-old male from Boston, MA who presented \
to UNC Hospital on 03/12/2024. His phone is (555) 123-4567 and \
email is john.smith@example.com. MRN: 1234567.";

/// Arguments for the deidentify command
#[derive(Args, Debug)]
pub struct DeidentifyArgs {
    /// Input text to de-identify; a sample is used when neither --text nor
    /// --input is given
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read input from a file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Rewrite strategy (mask or surrogate); overrides the configured default
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Detect and report spans without rewriting
    #[arg(long)]
    pub dry_run: bool,
}

impl DeidentifyArgs {
    /// Execute the deidentify command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting deidentify command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let strategy = match &self.strategy {
            Some(token) => Strategy::from_str(token)?,
            None => config.deidentification.strategy,
        };

        let text = self.read_input().await?;

        let pipeline = DeidPipeline::from_config(&config)?;

        let result = if self.dry_run {
            // Detection only: the original text stands in for the rendering
            let spans = pipeline.detect(&text)?;
            DeidResult {
                original_text: text.clone(),
                deidentified_text: text.clone(),
                spans,
            }
        } else {
            pipeline.deidentify(&text, strategy)?
        };

        match self.format.as_str() {
            "json" => self.print_json(&result)?,
            "text" => self.print_text(&result),
            other => {
                eprintln!("Unknown output format '{other}'. Must be one of: text, json");
                return Ok(2);
            }
        }

        Ok(0)
    }

    /// Resolve the input text from --text, --input, or the built-in sample
    async fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }

        match self.input.as_deref() {
            Some(path) if path.as_os_str() == "-" => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            None => Ok(SAMPLE_TEXT.to_string()),
        }
    }

    fn print_text(&self, result: &DeidResult) {
        println!("--------------------");
        println!("ORIGINAL TEXT:");
        println!("--------------------");
        println!("{}", result.original_text);

        if !self.dry_run {
            println!();
            println!("--------------------");
            println!("DE-IDENTIFIED TEXT:");
            println!("--------------------");
            println!("{}", result.deidentified_text);
        }

        println!();
        print!("{}", DetectionReport::from_result(result).format_console());
    }

    fn print_json(&self, result: &DeidResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_use_sample() {
        let args = DeidentifyArgs {
            text: None,
            input: None,
            strategy: None,
            format: "text".to_string(),
            dry_run: false,
        };
        assert!(args.text.is_none());
        assert!(args.input.is_none());
    }

    #[tokio::test]
    async fn test_read_input_prefers_text_flag() {
        let args = DeidentifyArgs {
            text: Some("MRN: 1234567".to_string()),
            input: None,
            strategy: None,
            format: "text".to_string(),
            dry_run: false,
        };
        assert_eq!(args.read_input().await.unwrap(), "MRN: 1234567");
    }

    #[tokio::test]
    async fn test_read_input_falls_back_to_sample() {
        let args = DeidentifyArgs {
            text: None,
            input: None,
            strategy: None,
            format: "text".to_string(),
            dry_run: false,
        };
        let text = args.read_input().await.unwrap();
        assert!(text.contains("John Smith"));
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Jane was here").unwrap();
        file.flush().unwrap();

        let args = DeidentifyArgs {
            text: None,
            input: Some(file.path().to_path_buf()),
            strategy: None,
            format: "text".to_string(),
            dry_run: false,
        };
        assert_eq!(args.read_input().await.unwrap(), "Jane was here");
    }

    #[tokio::test]
    async fn test_unknown_strategy_is_an_error() {
        let args = DeidentifyArgs {
            text: Some("x".to_string()),
            input: None,
            strategy: Some("redact".to_string()),
            format: "text".to_string(),
            dry_run: false,
        };
        assert!(args.execute("nonexistent.toml").await.is_err());
    }
}
