//! # countries-cli
//!
//! Fetches a list of countries from a remote JSON endpoint and searches it
//! by name or capital.
//!
//! ## Commands
//!
//! - `countries list` - Print every country
//! - `countries search <QUERY>` - Print countries whose name or capital contains the query
//! - `countries interactive` - Incremental search, one query per input line
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for settings:
//!
//! - `COUNTRIES_URL` - Endpoint serving the JSON country list
//! - `COUNTRIES_TIMEOUT_SECS` - HTTP request timeout in seconds (default: none)
//!
//! ## Library use
//!
//! ```rust
//! use countries_cli::record::CountryRecord;
//! use countries_cli::search::SearchIndex;
//!
//! let mut index = SearchIndex::new();
//! index.reset(vec![
//!     CountryRecord::new("France", "EU", "Paris", "FR"),
//!     CountryRecord::new("Germany", "EU", "Berlin", "DE"),
//! ]);
//! index.set_query("  BER ");
//! assert_eq!(index.visible()[0].name(), "Germany");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod client;
pub mod commands;
pub mod error;
pub mod observability;
pub mod record;
pub mod render;
pub mod search;
pub mod session;

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::observability::LogFormat;

/// Endpoint serving the reference country list.
pub const DEFAULT_URL: &str = "https://gist.githubusercontent.com/peymano-wmt/32dcb892b06648910ddd40406e37fdab/raw/db25946fd77c5873b0303b858e861ce724e0dcd0/countries.json";

/// Countries CLI - fetch and search a country list.
#[derive(Debug, Parser)]
#[command(name = "countries")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint serving the JSON country list.
    #[arg(long, env = "COUNTRIES_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// HTTP request timeout in seconds. Unset leaves the HTTP client's default.
    #[arg(long, env = "COUNTRIES_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Log output format (logs are written to stderr).
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            url: self.url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            format: self.format.clone(),
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every country.
    List(commands::list::ListArgs),
    /// Print countries whose name or capital contains the query.
    Search(commands::search::SearchArgs),
    /// Search incrementally, one query per line read from stdin.
    Interactive(commands::interactive::InteractiveArgs),
}

/// Output format.
#[derive(Debug, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Table output.
    Table,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint serving the JSON country list.
    pub url: String,
    /// HTTP request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: None,
            format: OutputFormat::default(),
        }
    }
}
