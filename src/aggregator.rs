use crate::config::{Config, RECENCY_WINDOW_HOURS};
use crate::fetcher::Fetcher;
use crate::publisher::{DigestSink, DiscordSink, Publisher};
use crate::selector;
use crate::store::SeenStore;
use crate::types::{DigestError, FeedBatch, FetchConfig, Result, RunReport};
use chrono::{Duration, Utc};
use tracing::{info, warn};

/// Owns the pieces of one polling pipeline and runs a full
/// fetch→select→persist→publish pass on demand.
pub struct NewsAggregator {
    config: Config,
    fetcher: Fetcher,
    store: SeenStore,
    publisher: Option<Publisher>,
}

impl NewsAggregator {
    /// Build the pipeline and validate the seen store.
    ///
    /// A corrupt or unreadable store file is fatal here: silently starting
    /// from an empty set would re-post old items.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(FetchConfig::default());

        let store = SeenStore::new(&config.seen_file);
        store.init()?;
        let seen = store.load()?;
        info!(
            "seen store at {} holds {} identifiers",
            store.path().display(),
            seen.len()
        );

        let publisher = config.channel_id.map(|channel_id| {
            let sink = DiscordSink::new(reqwest::Client::new(), &config.token, channel_id);
            Publisher::new(Box::new(sink))
        });

        Ok(Self {
            config,
            fetcher,
            store,
            publisher,
        })
    }

    /// Replace the delivery sink. Used by dry runs and by tests.
    pub fn with_sink(mut self, sink: Box<dyn DigestSink>) -> Self {
        self.publisher = Some(Publisher::new(sink));
        self
    }

    /// One full run: load the seen-set, fetch every source in list order,
    /// select, persist the seen-set, then publish.
    ///
    /// The seen-set is persisted before the destination is consulted, so a
    /// missing channel configuration surfaces as an error without causing
    /// duplicate posts on the next run.
    pub async fn run_once(&self) -> Result<RunReport> {
        let mut seen = self.store.load()?;

        let mut batches = Vec::new();
        let mut sources_failed = 0;
        for url in &self.config.feeds {
            match self.fetcher.fetch(url).await {
                Ok(entries) => batches.push(FeedBatch {
                    source: url.clone(),
                    entries,
                }),
                Err(e) => {
                    // Isolated to this source; the run carries on.
                    warn!("error fetching {url}: {e}");
                    sources_failed += 1;
                }
            }
        }

        let digest = selector::select(
            &batches,
            &mut seen,
            self.config.max_articles,
            Duration::hours(RECENCY_WINDOW_HOURS),
            Utc::now(),
        );

        self.store.save(&seen)?;

        let publisher = self.publisher.as_ref().ok_or_else(|| {
            DigestError::Config("NEWS_CHANNEL_ID is not set; digest not published".to_string())
        })?;
        let delivered = publisher.publish(&digest).await?;

        let report = RunReport {
            sources_fetched: batches.len(),
            sources_failed,
            items_selected: digest.len(),
            delivered,
        };
        info!(
            "run complete: {}/{} sources ok, {} items selected, delivered: {}",
            report.sources_fetched,
            report.sources_fetched + report.sources_failed,
            report.items_selected,
            report.delivered
        );
        Ok(report)
    }
}
