//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::suggest::AutocompleteProvider;

/// cotton-net: Cotton browser networking core
///
/// Resolves URLs over DNS-over-HTTPS and fetches search suggestions,
/// exercising the same client core the browser embeds.
#[derive(Debug, Parser)]
#[command(name = "cotton-net")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Per-call timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// DNS-over-HTTPS server host
    #[arg(long = "doh-host", global = true)]
    pub doh_host: Option<String>,

    /// Suggestion provider
    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderArg>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for cotton-net
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a URL's host over DoH and print the IP-substituted URL
    Resolve {
        /// The URL to resolve
        url: String,
    },
    /// Fetch search suggestions for a query
    Suggest {
        /// The query text
        query: String,
    },
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "cotton-net.toml")]
        output: PathBuf,
    },
}

/// Suggestion provider argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Google suggestions
    #[value(name = "google")]
    Google,
    /// DuckDuckGo suggestions
    #[value(name = "duckduckgo")]
    DuckDuckGo,
}

impl From<ProviderArg> for AutocompleteProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Google => Self::Google,
            ProviderArg::DuckDuckGo => Self::DuckDuckGo,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
