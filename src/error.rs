//! The single failure kind a scrape can surface.

use thiserror::Error;

/// Error returned when fetching or parsing the target page fails.
///
/// Every failure inside [`scrape_url`](crate::scrape_url) is wrapped into
/// this one kind; there is no retryable/fatal distinction and no partial
/// result. The display form carries a fixed prefix plus the message of the
/// underlying failure.
#[derive(Debug, Error)]
#[error("Failed to scrape the URL: {message}")]
pub struct ScrapeError {
    message: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl ScrapeError {
    /// Wrap an arbitrary failure message.
    ///
    /// An empty message is replaced with the literal `Unknown error`.
    pub fn new(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        Self {
            message,
            source: None,
        }
    }

    /// Wrap an underlying fetch failure, keeping its message and source.
    pub(crate) fn from_fetch(err: reqwest::Error) -> Self {
        let mut wrapped = Self::new(err.to_string());
        wrapped.source = Some(err);
        wrapped
    }

    /// Message of the underlying failure, without the wrapping prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
