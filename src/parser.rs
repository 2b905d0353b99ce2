use crate::types::{DigestError, RawEntry, Result};
use chrono::Utc;
use feed_rs::parser;
use tracing::debug;

/// Parse an RSS/Atom document into raw entries, in document order.
///
/// Entries without any link are skipped outright, since there is nothing to
/// point a reader at. Everything else is kept; the selector applies the
/// policy rules (novelty, recency, missing timestamp).
pub fn parse_feed(content: &[u8]) -> Result<Vec<RawEntry>> {
    let feed = parser::parse(content)
        .map_err(|e| DigestError::Parse(format!("failed to parse feed: {e}")))?;

    let entries: Vec<RawEntry> = feed.entries.into_iter().filter_map(to_raw_entry).collect();

    debug!("parsed {} entries", entries.len());
    Ok(entries)
}

fn to_raw_entry(entry: feed_rs::model::Entry) -> Option<RawEntry> {
    let link = entry.links.first()?.href.clone();

    // Prefer the feed-supplied id over the permalink; ids survive URL
    // rewrites, permalinks do not.
    let guid = if !entry.id.is_empty() {
        Some(entry.id.clone())
    } else if !link.is_empty() {
        Some(link.clone())
    } else {
        None
    };

    let title = entry
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "Untitled".to_string());

    // Prefer the summary, fall back to the content body.
    let summary = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();

    let published = entry.published.map(|dt| dt.with_timezone(&Utc));

    Some(RawEntry {
        guid,
        link,
        title,
        summary,
        published,
    })
}
