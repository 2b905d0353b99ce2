use anyhow::Context;
use clap::Parser;
use news_digest::config::POLL_INTERVAL_SECS;
use news_digest::{Config, LogSink, NewsAggregator};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "news-digest", about = "Posts fresh tech-news items to a Discord channel")]
struct Cli {
    /// Run a single pass and exit instead of polling on the schedule.
    #[arg(long)]
    once: bool,

    /// Log the digest instead of posting it to Discord.
    #[arg(long)]
    dry_run: bool,

    /// Override the seen-store location (also settable via SEEN_FILE).
    #[arg(long)]
    seen_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(path) = cli.seen_file {
        config.seen_file = path;
    }

    info!(
        "starting news-digest: {} feeds, cap {}, seen store {}",
        config.feeds.len(),
        config.max_articles,
        config.seen_file.display()
    );

    let mut aggregator = NewsAggregator::new(config).context("failed to start")?;
    if cli.dry_run {
        aggregator = aggregator.with_sink(Box::new(LogSink));
    }

    if cli.once {
        aggregator.run_once().await?;
        return Ok(());
    }

    // First tick fires immediately, so the startup run and the recurring
    // 2-hour schedule come from the same loop. Runs are awaited, so they
    // never overlap.
    let mut ticker = tokio::time::interval(Duration::from_secs(POLL_INTERVAL_SECS));
    loop {
        ticker.tick().await;
        if let Err(e) = aggregator.run_once().await {
            error!("run failed: {e}");
        }
    }
}
