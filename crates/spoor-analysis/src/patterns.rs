//! Propagation pattern profile over the window's links.

use spoor_core::constants::{SECS_PER_DAY, SECS_PER_HOUR};
use spoor_core::model::{PropagationLink, PropagationPatterns};
use spoor_core::types::collections::BTreeMap;

/// Summarize the window's links: counts per kind, mutation count, and
/// timing. Delta statistics cover only links with a positive time delta;
/// absent and zero deltas are excluded throughout.
pub fn propagation_patterns(links: &[PropagationLink]) -> PropagationPatterns {
    let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut mutations = 0;
    let mut delta_sum: i64 = 0;
    let mut delta_count = 0;
    let mut within_hour = 0;
    let mut within_day = 0;

    for link in links {
        *by_kind.entry(link.kind.name().to_string()).or_default() += 1;
        if link.mutated {
            mutations += 1;
        }
        if let Some(delta) = link.time_delta_secs {
            if delta > 0 {
                delta_sum += delta;
                delta_count += 1;
                if delta < SECS_PER_HOUR {
                    within_hour += 1;
                }
                if delta < SECS_PER_DAY {
                    within_day += 1;
                }
            }
        }
    }

    PropagationPatterns {
        total: links.len(),
        by_kind,
        mutations,
        avg_time_delta_secs: if delta_count > 0 {
            delta_sum as f64 / delta_count as f64
        } else {
            0.0
        },
        within_hour,
        within_day,
    }
}
