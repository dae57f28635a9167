//! Interactive command - incremental search over stdin.
//!
//! Each input line is treated as the new contents of a search box. A few
//! lines are commands instead:
//!
//! - `:clear` - drop the filter and show every country
//! - `:refresh` - fetch the list again (on failure the old list stays)
//! - `:quit` - end the session (as does end of input)

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::client::{Fetcher, HttpFetcher};
use crate::render::render_records;
use crate::session::Session;
use crate::{Config, OutputFormat};

/// Arguments for the interactive command.
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Do not print the full list after the initial fetch.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// New search text.
    Query(String),
    /// Cancel the search.
    Clear,
    /// Fetch the list again.
    Refresh,
    /// End the session.
    Quit,
}

impl Input {
    /// Parses one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":clear" | ":c" => Self::Clear,
            ":refresh" | ":r" => Self::Refresh,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Query(line.to_string()),
        }
    }
}

/// Execute the interactive command.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid, the initial fetch fails, or
/// stdin/stdout cannot be used.
pub async fn execute(args: InteractiveArgs, config: &Config) -> Result<()> {
    let fetcher = HttpFetcher::new(config)?;
    let mut session = Session::new();
    super::load(&mut session, &fetcher, &mut std::io::stderr()).await?;

    let mut stdout = std::io::stdout().lock();
    if !args.quiet {
        show(&session, &config.format, &mut stdout)?;
    }
    writeln!(
        stdout,
        "Type to search by name or capital (:clear, :refresh, :quit)."
    )?;

    let stdin = BufReader::new(tokio::io::stdin());
    run(
        &mut session,
        &fetcher,
        stdin,
        &mut stdout,
        &mut std::io::stderr(),
        &config.format,
    )
    .await
}

/// Drives a session from line-oriented input until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Fetch failures
/// during `:refresh` are reported on `out` and do not end the session. The
/// busy line for each refresh goes to `status`.
pub async fn run<F, R, W, S>(
    session: &mut Session,
    fetcher: &F,
    input: R,
    out: &mut W,
    status: &mut S,
    format: &OutputFormat,
) -> Result<()>
where
    F: Fetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Clear => {
                session.cancel();
            }
            Input::Refresh => match super::load(session, fetcher, status).await {
                Ok(count) => writeln!(out, "Loaded {count} countries")?,
                Err(err) => {
                    writeln!(out, "Refresh failed: {err:#}")?;
                    continue;
                }
            },
            Input::Query(text) => {
                tracing::debug!(query = %text, "search text changed");
                session.search(&text);
            }
        }
        show(session, format, out)?;
    }

    out.flush()?;
    Ok(())
}

fn show<W: Write>(session: &Session, format: &OutputFormat, out: &mut W) -> Result<()> {
    let index = session.index();
    let visible = index.visible();

    if !visible.is_empty() || matches!(format, OutputFormat::Json) {
        writeln!(out, "{}", render_records(visible, format)?)?;
    }
    if !matches!(format, OutputFormat::Json) {
        writeln!(out, "-- {} of {} countries", visible.len(), index.len())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::{FetchError, Result as FetchResult};
    use crate::record::CountryRecord;
    use std::sync::Mutex;

    /// Serves queued fetch outcomes in order.
    struct ScriptedFetcher {
        outcomes: Mutex<Vec<FetchResult<Vec<CountryRecord>>>>,
    }

    impl ScriptedFetcher {
        fn new(mut outcomes: Vec<FetchResult<Vec<CountryRecord>>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
            }
        }
    }

    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self) -> FetchResult<Vec<CountryRecord>> {
            self.outcomes
                .lock()
                .expect("lock")
                .pop()
                .expect("unexpected fetch")
        }
    }

    fn sample() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("France", "EU", "Paris", "FR"),
            CountryRecord::new("Germany", "EU", "Berlin", "DE"),
            CountryRecord::new("Spain", "EU", "Madrid", "ES"),
        ]
    }

    struct Driven {
        session: Session,
        out: String,
        status: String,
    }

    async fn drive(fetcher: &ScriptedFetcher, script: &str) -> Driven {
        let mut session = Session::new();
        session.refresh(fetcher).await.expect("initial fetch");
        let mut out = Vec::new();
        let mut status = Vec::new();
        run(
            &mut session,
            fetcher,
            script.as_bytes(),
            &mut out,
            &mut status,
            &OutputFormat::Json,
        )
        .await
        .expect("run session");
        Driven {
            session,
            out: String::from_utf8(out).expect("utf8"),
            status: String::from_utf8(status).expect("utf8"),
        }
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(Input::parse(":clear"), Input::Clear);
        assert_eq!(Input::parse("  :q "), Input::Quit);
        assert_eq!(Input::parse(":refresh"), Input::Refresh);
        assert_eq!(Input::parse(" par "), Input::Query(" par ".to_string()));
        assert_eq!(Input::parse(""), Input::Query(String::new()));
    }

    #[tokio::test]
    async fn test_each_line_filters_incrementally() {
        let fetcher = ScriptedFetcher::new(vec![Ok(sample())]);
        let driven = drive(&fetcher, "m\nma\nmad\n").await;

        assert_eq!(driven.session.index().query(), "mad");
        assert_eq!(driven.session.index().visible(), &sample()[2..]);
        assert_eq!(driven.out.matches("\"name\"").count(), 2 + 2 + 1);
        assert!(driven.status.is_empty());
    }

    #[tokio::test]
    async fn test_clear_restores_everything() {
        let fetcher = ScriptedFetcher::new(vec![Ok(sample())]);
        let driven = drive(&fetcher, "berlin\n:clear\n").await;

        assert_eq!(driven.session.index().query(), "");
        assert_eq!(driven.session.index().visible(), sample().as_slice());
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let fetcher = ScriptedFetcher::new(vec![Ok(sample())]);
        let driven = drive(&fetcher, "spain\n:quit\nfrance\n").await;

        assert_eq!(driven.session.index().query(), "spain");
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list_and_query() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(sample()),
            Err(FetchError::status(503, "unavailable")),
        ]);
        let driven = drive(&fetcher, "paris\n:refresh\n").await;

        assert!(driven.out.contains("Refresh failed"));
        assert!(driven.out.contains("503"));
        assert_eq!(driven.status, "Fetching countries... failed\n");
        assert_eq!(driven.session.index().all(), sample().as_slice());
        assert_eq!(driven.session.index().query(), "paris");
        assert_eq!(driven.session.index().visible(), &sample()[..1]);
    }

    #[tokio::test]
    async fn test_successful_refresh_replaces_list() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok(sample()),
            Ok(vec![CountryRecord::new("Japan", "AS", "Tokyo", "JP")]),
        ]);
        let driven = drive(&fetcher, "paris\n:refresh\n").await;

        assert!(driven.out.contains("Loaded 1 countries"));
        assert_eq!(driven.session.index().query(), "");
        assert_eq!(driven.session.index().visible()[0].name(), "Japan");
    }

    #[tokio::test]
    async fn test_every_refresh_shows_busy_line() {
        let fetcher = ScriptedFetcher::new(vec![Ok(sample()), Ok(sample()), Ok(sample())]);
        let driven = drive(&fetcher, ":refresh\nfr\n:refresh\n").await;

        assert_eq!(
            driven.status,
            "Fetching countries... 3 loaded\nFetching countries... 3 loaded\n"
        );
        assert!(!driven.out.contains("Fetching"));
    }
}
