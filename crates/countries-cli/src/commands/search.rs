//! Search command - print countries matching a query.

use anyhow::Result;
use clap::Args;

use crate::Config;
use crate::client::HttpFetcher;
use crate::render::print_records;
use crate::session::Session;

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in country names and capitals.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl SearchArgs {
    /// The query words joined back into one search string.
    #[must_use]
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid or the fetch fails.
pub async fn execute(args: SearchArgs, config: &Config) -> Result<()> {
    let fetcher = HttpFetcher::new(config)?;
    let mut session = Session::new();
    super::load(&mut session, &fetcher, &mut std::io::stderr()).await?;

    let text = args.text();
    let matches = session.search(&text);
    tracing::debug!(query = %text, matches = matches.len(), "search complete");

    print_records(
        matches,
        &config.format,
        &format!("No countries match {:?}", text.trim()),
    )
}
