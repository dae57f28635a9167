//! HTTP client for the country list endpoint.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};
use tracing::Instrument;

use crate::Config;
use crate::error::{FetchError, Result};
use crate::observability::fetch_span;
use crate::record::CountryRecord;

/// Source of the full country collection.
///
/// A fetch issues at most one request and never touches search state; the
/// caller decides what to do with the result.
pub trait Fetcher {
    /// Fetches and decodes the full collection.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] on transport failure or a non-2xx
    /// status, and [`FetchError::Decode`] if the body is not a JSON array of
    /// country objects.
    fn fetch(&self) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send;
}

/// Fetches the country list with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: Url,
}

impl HttpFetcher {
    /// Creates a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the endpoint does not parse or is
    /// not `http`/`https`, and [`FetchError::Network`] if the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let url = parse_endpoint(&config.url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::network("failed to create HTTP client", e))?;

        Ok(Self { client, url })
    }

    /// The endpoint this fetcher reads from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch_once(&self) -> Result<Vec<CountryRecord>> {
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| FetchError::network("failed to send request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network("failed to read response body", e))?;

        decode_records(&body)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<CountryRecord>> {
        let span = fetch_span(self.url.as_str());
        let result = self.fetch_once().instrument(span.clone()).await;

        let _guard = span.enter();
        match &result {
            Ok(records) => tracing::info!(count = records.len(), "fetched countries"),
            Err(err) => tracing::warn!(error = %err, "fetch failed"),
        }
        result
    }
}

/// Decodes a response body into country records.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] unless the body is a JSON array whose
/// elements all carry string `name`, `region`, `capital` and `code` fields.
pub fn decode_records(body: &[u8]) -> Result<Vec<CountryRecord>> {
    serde_json::from_slice(body).map_err(FetchError::decode)
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| FetchError::invalid_url(raw, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::invalid_url(
            raw,
            format!("unsupported scheme {other:?}"),
        )),
    }
}
