use crate::feeds;
use crate::types::{DigestError, Result};
use crate::utils;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// How far back an entry's publish timestamp may lie and still be selected.
pub const RECENCY_WINDOW_HOURS: i64 = 2;

/// Delay between runs. The first run fires immediately at startup.
pub const POLL_INTERVAL_SECS: u64 = 2 * 60 * 60;

/// Per-source network timeout.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Default cap on items selected per run when `MAX_ARTICLES` is unset.
pub const DEFAULT_MAX_ARTICLES: usize = 2;

/// Default location of the persisted seen-set.
pub const DEFAULT_SEEN_FILE: &str = "seen.json";

/// Runtime configuration, loaded once at startup.
///
/// `token` is required; a missing `NEWS_CHANNEL_ID` is deferred to run time
/// so that fetching and dedup-state upkeep still happen (the run then fails
/// visibly instead of publishing).
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub channel_id: Option<u64>,
    pub max_articles: usize,
    pub seen_file: PathBuf,
    pub feeds: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("DISCORD_TOKEN")
            .map_err(|_| DigestError::Config("DISCORD_TOKEN is not set".to_string()))?;

        // The original deployment used 0 as "unset"; honor both spellings.
        let channel_id = match env::var("NEWS_CHANNEL_ID") {
            Ok(raw) => {
                let id: u64 = raw.parse().map_err(|_| {
                    DigestError::Config(format!("NEWS_CHANNEL_ID is not a channel id: {raw:?}"))
                })?;
                (id != 0).then_some(id)
            }
            Err(_) => None,
        };

        let max_articles = match env::var("MAX_ARTICLES") {
            Ok(raw) => raw.parse().map_err(|_| {
                DigestError::Config(format!("MAX_ARTICLES is not a number: {raw:?}"))
            })?,
            Err(_) => DEFAULT_MAX_ARTICLES,
        };

        let seen_file = env::var("SEEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEEN_FILE));

        Ok(Self {
            token,
            channel_id,
            max_articles,
            seen_file,
            feeds: validated_feeds(),
        })
    }
}

/// The static feed list, minus anything that does not parse as an http(s)
/// URL. The list is hard-coded, so a skip here means a typo in `feeds.rs`.
fn validated_feeds() -> Vec<String> {
    feeds::TECH_NEWS_FEEDS
        .iter()
        .filter(|url| {
            let ok = utils::url::is_http_url(url);
            if !ok {
                warn!("skipping invalid feed URL in static list: {url}");
            }
            ok
        })
        .map(|url| url.to_string())
        .collect()
}
