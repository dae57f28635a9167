//! List command - print every country.

use anyhow::Result;
use clap::Args;

use crate::Config;
use crate::client::HttpFetcher;
use crate::render::print_records;
use crate::session::Session;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print only the number of countries.
    #[arg(long, short = 'c')]
    pub count: bool,
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid or the fetch fails.
pub async fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let fetcher = HttpFetcher::new(config)?;
    let mut session = Session::new();
    let count = super::load(&mut session, &fetcher, &mut std::io::stderr()).await?;

    if args.count {
        println!("{count}");
        return Ok(());
    }

    print_records(session.index().visible(), &config.format, "No countries found")
}
