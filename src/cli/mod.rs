//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Scrub using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Scrub - Clinical Text De-identification Tool
#[derive(Parser, Debug)]
#[command(name = "scrub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "scrub.toml", env = "SCRUB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SCRUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// De-identify clinical text
    Deidentify(commands::deidentify::DeidentifyArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
