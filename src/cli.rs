//! Command-line interface definitions using clap
//!
//! One subcommand per backend capability, plus advisory-list maintenance and
//! the interactive TUI. Running with no subcommand starts the TUI.

use clap::{Parser, Subcommand};

/// Terminal client for a URL shortener REST API
#[derive(Parser)]
#[command(name = "shortlink-console")]
#[command(version)]
#[command(about = "Shorten URLs, browse your links, inspect click statistics", long_about = None)]
pub struct Cli {
    /// Override the API base URL (default: http://localhost:8080/api)
    #[arg(long, short = 'u', global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start interactive TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    ///
    /// Usage: shorten <URL> [CUSTOM_CODE]
    /// Without a custom code the server picks a random one.
    Shorten {
        /// Destination URL (http/https)
        url: String,

        /// Custom short code (letters, numbers, hyphens, underscores)
        custom_code: Option<String>,
    },

    /// Show click statistics for a short code
    Stats {
        /// Short code to look up
        short_code: String,
    },

    /// List short links known to the backend
    List {
        /// Maximum number of links to fetch
        #[arg(long, default_value_t = 50)]
        limit: usize,

        /// Number of links to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Delete a short link
    Remove {
        /// Short code to delete
        short_code: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Check whether the API is reachable
    Health,

    /// Inspect the advisory list of codes created from this machine
    Mine {
        /// Forget every recorded code
        #[arg(long, conflicts_with = "resync")]
        clear: bool,

        /// Prune codes the backend no longer knows about
        #[arg(long)]
        resync: bool,
    },
}
