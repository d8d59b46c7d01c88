//! Stable top-N ranking.

use crate::domain::{MentionRecord, RankedMention};

/// The `n` highest-scoring items, descending by `score`.
///
/// The sort is stable: items with equal score keep their input order.
pub fn top_n_by<T, S, F>(items: &[T], n: usize, score: F) -> Vec<&T>
where
    S: Ord,
    F: Fn(&T) -> S,
{
    let mut scored: Vec<(S, &T)> = items.iter().map(|item| (score(item), item)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(n);
    scored.into_iter().map(|(_, item)| item).collect()
}

/// Mentions ranked by likes + shares.
pub fn top_content(mentions: &[MentionRecord], n: usize) -> Vec<RankedMention> {
    top_n_by(mentions, n, MentionRecord::engagement_score)
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankedMention {
            rank: i + 1,
            engagement: m.engagement_score(),
            mention: m.clone(),
        })
        .collect()
}
