//! The country record as served by the remote endpoint.

use serde::{Deserialize, Serialize};

/// One decoded country entry.
///
/// Field names match the wire contract exactly. Extra fields in the payload
/// are ignored; a missing or non-string field fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    name: String,
    region: String,
    capital: String,
    code: String,
}

impl CountryRecord {
    /// Creates a record from its four fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        capital: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            capital: capital.into(),
            code: code.into(),
        }
    }

    /// Country name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region code (e.g. `EU`, `AS`).
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Capital city. May be empty for territories without one.
    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// ISO country code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns true if `name` or `capital` contains an already-normalized query.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn matches(&self, normalized_query: &str) -> bool {
        normalized_query.is_empty()
            || self.name.to_lowercase().contains(normalized_query)
            || self.capital.to_lowercase().contains(normalized_query)
    }
}

impl std::fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.region)
    }
}
