//! Remote reference feed retrieval.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{AnalyzerError, AnalyzerResult};

/// HTTP client for the event and weather reference feeds.
///
/// A feed is a JSON array served from a single URL. Anything other than a
/// success status is an error: an unavailable feed never reads as an empty
/// one.
#[derive(Debug, Clone, Default)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and decodes a feed.
    ///
    /// # Returns
    ///
    /// The records in feed order, or:
    /// - `FeedRequestFailed` if no response was received
    /// - `FeedStatus` for a non-success status
    /// - `FeedParseError` if the body is not a JSON array of `T`
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> AnalyzerResult<Vec<T>> {
        let request_failed = |e: reqwest::Error| AnalyzerError::FeedRequestFailed {
            url: url.to_string(),
            message: e.to_string(),
        };

        info!(url, "Fetching data");
        let response = self.client.get(url).send().await.map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Reference feed returned an error status");
            return Err(AnalyzerError::FeedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_failed)?;
        let records: Vec<T> =
            serde_json::from_slice(&body).map_err(|e| AnalyzerError::FeedParseError {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        info!(url, records = records.len(), "Fetched reference data");
        Ok(records)
    }
}
