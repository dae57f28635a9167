//! In-memory search over the fetched country list.
//!
//! [`SearchIndex`] keeps the full collection (`all`) and a derived filtered
//! view (`visible`). The view is recomputed on every query change and on
//! every reset, so it is always exactly `all` filtered by the current query,
//! in source order.
//!
//! Matching is a linear, case-insensitive substring scan over the name and
//! capital of each record. Country lists are a few hundred entries, so there
//! is nothing to gain from a real index.

use crate::record::CountryRecord;

/// Normalizes raw search text: trims surrounding whitespace and lowercases.
#[must_use]
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Full collection plus the filtered view for the current query.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    all: Vec<CountryRecord>,
    visible: Vec<CountryRecord>,
    query: String,
}

impl SearchIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full collection and clears the query.
    ///
    /// The index takes ownership of `records`; `visible` is a separate copy.
    pub fn reset(&mut self, records: impl Into<Vec<CountryRecord>>) {
        self.all = records.into();
        self.query.clear();
        self.visible = self.all.clone();
        tracing::debug!(count = self.all.len(), "search index reset");
    }

    /// Sets the query from raw search text and recomputes the view.
    pub fn set_query(&mut self, text: &str) {
        self.query = normalize_query(text);
        self.recompute();
        tracing::debug!(
            query = %self.query,
            matches = self.visible.len(),
            "search query applied"
        );
    }

    /// Clears the query, making every record visible again.
    pub fn clear(&mut self) {
        self.set_query("");
    }

    /// The full collection, in source order.
    #[must_use]
    pub fn all(&self) -> &[CountryRecord] {
        &self.all
    }

    /// Records matching the current query, in source order.
    #[must_use]
    pub fn visible(&self) -> &[CountryRecord] {
        &self.visible
    }

    /// The current normalized query. Empty when no filter is applied.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of records in the full collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns true if the full collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn recompute(&mut self) {
        if self.query.is_empty() {
            self.visible.clone_from(&self.all);
            return;
        }

        self.visible = self
            .all
            .iter()
            .filter(|record| record.matches(&self.query))
            .cloned()
            .collect();
    }
}
