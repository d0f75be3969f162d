use clap::Parser;
use scrub::cli::{Cli, Commands};
use scrub::config::{load_config_or_default, LoggingConfig};
use scrub::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging setup needs the config, but a broken config must still be
    // reportable: fall back to console-only logging on load failure
    let (logging_config, config_log_level) = load_config_or_default(&cli.config)
        .map(|c| (c.logging, c.application.log_level))
        .unwrap_or_else(|_| (LoggingConfig::default(), "info".to_string()));

    let log_level = cli.log_level.as_deref().unwrap_or(&config_log_level);
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Scrub - Clinical Text De-identification Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Deidentify(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
