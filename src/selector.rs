use crate::store::SeenSet;
use crate::types::{Digest, FeedBatch, SelectedItem};
use crate::utils;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Longest a normalized summary may get before truncation.
pub const SUMMARY_MAX_CHARS: usize = 300;

/// Appended to a truncated summary.
pub const ELLIPSIS: &str = "...";

/// Substituted when a source summary strips down to nothing.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "Click below to read the full article.";

/// Scan fetched entries and assemble the digest for one run.
///
/// Batches are consumed in list order, entries in document order, and the
/// resulting digest keeps that order; there is no recency or relevance sort.
/// `now` is injected so the recency window is testable.
///
/// Selected identifiers are marked in `seen` immediately, so a duplicate
/// reference from a later source within the same run is excluded. The caller
/// persists `seen` after the pass.
pub fn select(
    batches: &[FeedBatch],
    seen: &mut SeenSet,
    cap: usize,
    window: Duration,
    now: DateTime<Utc>,
) -> Digest {
    let mut digest = Digest::default();
    if cap == 0 {
        return digest;
    }

    let cutoff = now - window;

    'sources: for batch in batches {
        for entry in &batch.entries {
            // Entries missing an identifier or a publish timestamp are
            // excluded, not errors, and are never marked seen.
            let Some(guid) = entry.guid.as_deref() else {
                continue;
            };
            let Some(published) = entry.published else {
                continue;
            };

            if seen.contains(guid) {
                continue;
            }
            if published <= cutoff {
                continue;
            }

            digest.items.push(SelectedItem {
                title: entry.title.clone(),
                link: entry.link.clone(),
                summary: normalize_summary(&entry.summary),
            });
            seen.mark(guid);

            // Hard global cap: once full, stop scanning every remaining
            // source, not just this one.
            if digest.len() == cap {
                debug!("cap of {cap} reached at source {}", batch.source);
                break 'sources;
            }
        }
    }

    digest
}

/// Strip markup, substitute the placeholder for empty results, and clip to
/// [`SUMMARY_MAX_CHARS`].
pub fn normalize_summary(raw: &str) -> String {
    let text = utils::text::strip_html(raw);
    if text.is_empty() {
        return EMPTY_SUMMARY_PLACEHOLDER.to_string();
    }
    utils::text::clip(&text, SUMMARY_MAX_CHARS, ELLIPSIS)
}
