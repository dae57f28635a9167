//! Countries CLI - fetch and search a remote country list.
//!
//! The main entry point for the `countries` binary.

use anyhow::Result;
use clap::Parser;

use countries_cli::observability::init_logging;
use countries_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.log_format);
    let config = cli.config();

    // Create runtime and execute
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::List(args) => countries_cli::commands::list::execute(args, &config).await,
            Commands::Search(args) => {
                countries_cli::commands::search::execute(args, &config).await
            }
            Commands::Interactive(args) => {
                countries_cli::commands::interactive::execute(args, &config).await
            }
        }
    })
}
