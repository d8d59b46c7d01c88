//! Group-by with a running numeric mean.

use std::collections::HashMap;

use crate::domain::{ChannelPerformance, GroupMean, MessageRecord};

impl GroupMean {
    fn start(key: &str) -> Self {
        Self {
            key: key.to_string(),
            count: 0,
            total: 0.0,
            average: 0.0,
        }
    }

    /// Fold one value in; `average` always reflects the current `count`.
    fn accumulate(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
        self.average = self.total / self.count as f64;
    }
}

/// Group `items` by `key` and track count, total and mean of `value`.
///
/// Groups come out in first-seen order.
pub fn group_mean_by<T, K, V>(items: &[T], key: K, value: V) -> Vec<GroupMean>
where
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupMean> = Vec::new();

    for item in items {
        let k = key(item);
        let pos = *index.entry(k).or_insert_with(|| {
            groups.push(GroupMean::start(k));
            groups.len() - 1
        });
        groups[pos].accumulate(value(item));
    }

    groups
}

/// Message count and mean sentiment score per channel.
pub fn channel_performance(messages: &[MessageRecord]) -> Vec<ChannelPerformance> {
    group_mean_by(messages, |m| m.channel.as_str(), |m| m.sentiment_score)
        .into_iter()
        .map(ChannelPerformance::from)
        .collect()
}
