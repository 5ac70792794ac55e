//! Coordinated-burst detection over content publication times.
//!
//! A burst is a window of near-simultaneous items from enough distinct
//! sources. Bursts are deduplicated by the anchor's hour bucket, and the
//! sweep jumps past a matched window so its sub-windows are not reported
//! again. The bucket keys on the anchor alone, so a campaign straddling
//! an hour boundary can still surface twice.

use chrono::{DateTime, Utc};
use spoor_core::constants::BURST_SAMPLE_CAP;
use spoor_core::model::{ContentItem, CoordinatedBurst};
use spoor_core::types::collections::{FxHashSet, SmallVec10};
use tracing::info;
use uuid::Uuid;

/// Scan `items` for coordinated posting bursts.
///
/// `items` must be ordered by publication time ascending; items without
/// a timestamp are skipped entirely. A window anchored at an item spans
/// every later item within `window_secs` (inclusive). It becomes a burst
/// when it holds at least `min_sources` items drawn from at least
/// `min_sources` distinct sources; unattributed items count toward the
/// item total but not toward distinct sources.
pub fn detect_coordinated_bursts(
    items: &[ContentItem],
    window_secs: i64,
    min_sources: usize,
) -> Vec<CoordinatedBurst> {
    let timed: Vec<(&ContentItem, DateTime<Utc>)> = items
        .iter()
        .filter_map(|item| item.published_at.map(|at| (item, at)))
        .collect();

    let mut bursts = Vec::new();
    let mut seen_hours: FxHashSet<String> = FxHashSet::default();

    let mut i = 0;
    while i < timed.len() {
        let anchor_at = timed[i].1;

        let mut j = i + 1;
        while j < timed.len() && (timed[j].1 - anchor_at).num_seconds() <= window_secs {
            j += 1;
        }

        let window = &timed[i..j];
        if window.len() >= min_sources {
            let sources: FxHashSet<Uuid> = window
                .iter()
                .filter_map(|(item, _)| item.source_id)
                .collect();
            if sources.len() >= min_sources {
                let hour_key = anchor_at.format("%Y-%m-%dT%H").to_string();
                if seen_hours.insert(hour_key) {
                    let content_ids: SmallVec10<Uuid> = window
                        .iter()
                        .take(BURST_SAMPLE_CAP)
                        .map(|(item, _)| item.id)
                        .collect();
                    bursts.push(CoordinatedBurst {
                        timestamp: anchor_at,
                        content_count: window.len(),
                        unique_sources: sources.len(),
                        window_secs,
                        content_ids,
                    });
                    // Jump past the matched window.
                    i = j;
                    continue;
                }
            }
        }
        i += 1;
    }

    info!(bursts = bursts.len(), "coordination scan complete");
    bursts
}
