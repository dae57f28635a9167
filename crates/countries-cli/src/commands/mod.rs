//! Command implementations.

pub mod interactive;
pub mod list;
pub mod search;

use std::io::Write;

use anyhow::{Context, Result};

use crate::client::Fetcher;
use crate::session::Session;

/// Refreshes `session`, bracketing the fetch with a busy line on `status`.
///
/// Commands pass stderr so the indicator never mixes with results on stdout.
///
/// # Errors
///
/// Returns the fetch error with context; the session keeps its previous data.
/// Also fails if `status` cannot be written.
pub async fn load<F, S>(session: &mut Session, fetcher: &F, status: &mut S) -> Result<usize>
where
    F: Fetcher,
    S: Write,
{
    write!(status, "Fetching countries...")?;
    status.flush()?;
    let result = session.refresh(fetcher).await;
    match &result {
        Ok(count) => writeln!(status, " {count} loaded")?,
        Err(_) => writeln!(status, " failed")?,
    }
    result.context("Failed to fetch countries")
}
