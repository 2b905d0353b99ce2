use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One entry as it came out of a feed document, before any selection policy
/// is applied.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Stable identifier for deduplication. The feed-supplied id is preferred
    /// over the permalink; entries that offer neither end up with `None` and
    /// are never selected.
    pub guid: Option<String>,
    pub link: String,
    pub title: String,
    /// Raw summary text, possibly containing markup, possibly empty.
    pub summary: String,
    pub published: Option<DateTime<Utc>>,
}

/// The entries fetched from a single source, in document order.
#[derive(Debug, Clone)]
pub struct FeedBatch {
    pub source: String,
    pub entries: Vec<RawEntry>,
}

/// A normalized article ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItem {
    pub title: String,
    pub link: String,
    /// Plain text, at most 300 characters plus an ellipsis marker, or the
    /// fixed placeholder when the source summary was empty.
    pub summary: String,
}

/// The batch of newly selected items assembled for one delivery.
#[derive(Debug, Clone, Default)]
pub struct Digest {
    pub items: Vec<SelectedItem>,
}

impl Digest {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outcome of one fetch→select→publish pass, for run-summary logging.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub sources_fetched: usize,
    pub sources_failed: usize,
    pub items_selected: usize,
    pub delivered: bool,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("news-digest/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(crate::config::FETCH_TIMEOUT_SECS),
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("chat API error (HTTP {status}): {body}")]
    ChatApi { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
