//! Rendering of country lists for each output format.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::OutputFormat;
use crate::record::CountryRecord;

#[derive(Tabled)]
struct CountryRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Region")]
    region: &'a str,
    #[tabled(rename = "Capital")]
    capital: &'a str,
    #[tabled(rename = "Code")]
    code: &'a str,
}

/// Renders records in the requested format.
///
/// Text and table output for an empty list is an empty string; JSON output is
/// always a (possibly empty) array in the wire shape.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[CountryRecord], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize countries")
        }
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| {
                format!(
                    "{record}  {}  {}",
                    record.code().bold(),
                    record.capital()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            if records.is_empty() {
                return Ok(String::new());
            }
            let rows = records.iter().map(|r| CountryRow {
                name: r.name(),
                region: r.region(),
                capital: r.capital(),
                code: r.code(),
            });
            Ok(Table::new(rows).to_string())
        }
    }
}

/// Prints records to stdout, or `empty_message` when there are none.
///
/// JSON output always prints the array so scripts can rely on it.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn print_records(
    records: &[CountryRecord],
    format: &OutputFormat,
    empty_message: &str,
) -> Result<()> {
    if records.is_empty() && !matches!(format, OutputFormat::Json) {
        println!("{}", empty_message.dimmed());
        return Ok(());
    }
    println!("{}", render_records(records, format)?);
    Ok(())
}
