use crate::parser;
use crate::types::{DigestError, FetchConfig, RawEntry, Result};
use reqwest::Client;
use tracing::debug;

/// Fetches one feed document per call over a shared HTTP client.
///
/// There is deliberately no retry here: a failed source contributes zero
/// entries to the run and the next scheduled run is the retry mechanism.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Fetch and parse a single feed.
    ///
    /// Any failure (timeout, connection error, non-2xx status, malformed
    /// document) surfaces as an error for the caller to isolate to this
    /// source.
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        debug!("fetching feed: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DigestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let entries = parser::parse_feed(&body)?;
        debug!("feed {url}: {} entries", entries.len());
        Ok(entries)
    }
}
