//! Fetch-then-search composition used by the commands.

use crate::client::Fetcher;
use crate::error::Result;
use crate::record::CountryRecord;
use crate::search::SearchIndex;

/// A search index fed by a [`Fetcher`].
///
/// A successful refresh resets the index; a failed one leaves it untouched.
/// `refresh` borrows the session mutably, so a query cannot be applied while
/// a fetch for the same session is still pending.
#[derive(Debug, Default)]
pub struct Session {
    index: SearchIndex,
}

impl Session {
    /// Creates a session with an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the collection and, on success, resets the index with it.
    ///
    /// Returns the number of records now held.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error. The index keeps its previous contents and
    /// query.
    pub async fn refresh<F: Fetcher>(&mut self, fetcher: &F) -> Result<usize> {
        let records = fetcher.fetch().await?;
        self.index.reset(records);
        Ok(self.index.len())
    }

    /// Applies a text-change event and returns the filtered view.
    pub fn search(&mut self, text: &str) -> &[CountryRecord] {
        self.index.set_query(text);
        self.index.visible()
    }

    /// Applies a cancel event and returns the full view.
    pub fn cancel(&mut self) -> &[CountryRecord] {
        self.index.clear();
        self.index.visible()
    }

    /// Read-only access to the index.
    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}
