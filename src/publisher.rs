use crate::types::{Digest, DigestError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const DIGEST_TITLE: &str = "📰 Latest Tech News";
const DIGEST_COLOR: u32 = 0x00ff00;

/// Delivery seam for the assembled digest.
///
/// The core hands a sink one digest per run; authentication, rate limits,
/// and message formatting live behind this trait.
#[async_trait]
pub trait DigestSink: Send + Sync {
    async fn deliver(&self, digest: &Digest) -> Result<()>;
}

/// Wraps a sink with the empty-digest rule.
pub struct Publisher {
    sink: Box<dyn DigestSink>,
}

impl Publisher {
    pub fn new(sink: Box<dyn DigestSink>) -> Self {
        Self { sink }
    }

    /// Submit the digest once. An empty digest is a no-op: the sink is not
    /// called and `Ok(false)` is returned.
    pub async fn publish(&self, digest: &Digest) -> Result<bool> {
        if digest.is_empty() {
            debug!("empty digest, nothing to publish");
            return Ok(false);
        }
        self.sink.deliver(digest).await?;
        Ok(true)
    }
}

/// Posts the digest as a single embed message to one Discord channel via the
/// REST API.
pub struct DiscordSink {
    client: Client,
    token: String,
    channel_id: u64,
}

impl DiscordSink {
    pub fn new(client: Client, token: impl Into<String>, channel_id: u64) -> Self {
        Self {
            client,
            token: token.into(),
            channel_id,
        }
    }
}

#[async_trait]
impl DigestSink for DiscordSink {
    async fn deliver(&self, digest: &Digest) -> Result<()> {
        let url = format!(
            "{DISCORD_API_BASE}/channels/{}/messages",
            self.channel_id
        );

        let fields: Vec<_> = digest
            .items
            .iter()
            .map(|item| {
                json!({
                    "name": format!("**{}**", item.title),
                    "value": format!("{}\n[Read more]({})", item.summary, item.link),
                    "inline": false,
                })
            })
            .collect();

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&json!({
                "embeds": [{
                    "title": DIGEST_TITLE,
                    "color": DIGEST_COLOR,
                    "timestamp": Utc::now().to_rfc3339(),
                    "fields": fields,
                }]
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DigestError::ChatApi {
                status: status.as_u16(),
                body,
            });
        }

        debug!("delivered digest of {} items", digest.len());
        Ok(())
    }
}

/// Writes the digest to the log instead of a chat channel. Used by dry runs.
pub struct LogSink;

#[async_trait]
impl DigestSink for LogSink {
    async fn deliver(&self, digest: &Digest) -> Result<()> {
        for item in &digest.items {
            info!("[digest] {} | {} | {}", item.title, item.summary, item.link);
        }
        Ok(())
    }
}
