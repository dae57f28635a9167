//! Error types for fetching the country list.
//!
//! Every failure is terminal for the fetch that produced it: there are no
//! partial results and nothing is retried. Filtering never fails.

/// The result type used by the fetcher.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching and decoding country records.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured endpoint is not a usable HTTP(S) URL.
    #[error("invalid endpoint URL {url:?}: {message}")]
    InvalidUrl {
        /// The endpoint as configured.
        url: String,
        /// Why the endpoint was rejected.
        message: String,
    },

    /// The request failed at the transport level or returned a non-2xx status.
    #[error("network error: {message}")]
    Network {
        /// Description of the failure.
        message: String,
        /// HTTP status, when the server answered with a non-success code.
        status: Option<u16>,
        /// The underlying transport error, if any.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body is not a JSON array of country objects.
    #[error("decode error: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
        /// The underlying JSON error, if any.
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Coarse category of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// See [`FetchError::InvalidUrl`].
    InvalidUrl,
    /// See [`FetchError::Network`].
    Network,
    /// See [`FetchError::Decode`].
    Decode,
}

impl FetchError {
    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a network error from a transport failure.
    #[must_use]
    pub fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            message: message.into(),
            status: source.status().map(|s| s.as_u16()),
            source: Some(source),
        }
    }

    /// Creates a network error for a non-success HTTP status.
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        Self::Network {
            message: format!("server responded with status {status}: {}", excerpt(body)),
            status: Some(status),
            source: None,
        }
    }

    /// Creates a decode error from a JSON failure.
    #[must_use]
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            message: format!("expected a JSON array of country objects: {source}"),
            source: Some(source),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    /// Returns the HTTP status code for status failures.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

const BODY_EXCERPT_CHARS: usize = 200;

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}
