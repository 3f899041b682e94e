//! CLI interface module
//!
//! Dispatches clap-parsed commands to their handlers. Every command is a
//! single API round trip; errors come back as [`CliError`] and are printed
//! colored by `main`.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::config::Config;

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    InputError(String),
    LocalError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::LocalError(msg) => format!("Local error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => {
                format!("{} {}", "API error:".red().bold(), msg.white())
            }
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::LocalError(msg) => {
                format!("{} {}", "Local error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ConsoleError> for CliError {
    fn from(err: crate::errors::ConsoleError) -> Self {
        use crate::errors::ConsoleError;
        match err {
            ConsoleError::Api(msg) => CliError::ApiError(msg),
            ConsoleError::Network(msg) => CliError::ApiError(msg),
            ConsoleError::Validation(msg) => CliError::InputError(msg),
            other => CliError::LocalError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(command: Commands, config: Config) -> Result<(), CliError> {
    match command {
        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI mode is dispatched in main"),
        Commands::Shorten { url, custom_code } => {
            commands::shorten::run(&config, &url, custom_code.as_deref()).await
        }
        Commands::Stats { short_code } => commands::stats::run(&config, &short_code).await,
        Commands::List { limit, offset } => commands::list::run(&config, limit, offset).await,
        Commands::Remove { short_code, yes } => {
            commands::remove::run(&config, &short_code, yes).await
        }
        Commands::Health => commands::health::run(&config).await,
        Commands::Mine { clear, resync } => commands::mine::run(&config, clear, resync).await,
    }
}
