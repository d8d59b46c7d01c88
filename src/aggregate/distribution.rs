//! Categorical distribution with percentage share.

use std::collections::HashMap;

use crate::domain::{DistributionEntry, MentionRecord, PlatformShare};

/// Group `items` by `key` and compute each group's count and share.
///
/// Entries come out in first-seen key order. An empty input yields an empty
/// distribution.
pub fn distribution_by<T, F>(items: &[T], key: F) -> Vec<DistributionEntry>
where
    F: Fn(&T) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(k) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }

    let total = items.len();
    counts
        .into_iter()
        .map(|(k, count)| DistributionEntry {
            key: k.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

/// Mentions per platform.
pub fn platform_distribution(mentions: &[MentionRecord]) -> Vec<PlatformShare> {
    distribution_by(mentions, |m| m.platform.as_str())
        .into_iter()
        .map(PlatformShare::from)
        .collect()
}

pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
