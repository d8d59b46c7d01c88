//! Headline totals and last-hour activity counts.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{EngagementTotals, MentionRecord, MessageRecord, RecentActivity};

pub fn engagement_totals(mentions: &[MentionRecord]) -> EngagementTotals {
    let (total_engagement, total_reach, sentiment_total) = mentions.iter().fold(
        (0u64, 0u64, 0.0f64),
        |(engagement, reach, sentiment), m| {
            (
                engagement.saturating_add(m.metrics.interactions()),
                reach.saturating_add(m.metrics.reach),
                sentiment + m.sentiment.score,
            )
        },
    );

    let average_sentiment = if mentions.is_empty() {
        0.0
    } else {
        sentiment_total / mentions.len() as f64
    };

    EngagementTotals {
        total_engagement,
        total_reach,
        average_sentiment,
    }
}

/// Records strictly newer than one hour before `now`.
///
/// `now` is supplied by the caller so a snapshot can be evaluated
/// reproducibly; nothing is evicted or retained between calls.
pub fn recent_activity(
    mentions: &[MentionRecord],
    messages: &[MessageRecord],
    now: DateTime<Utc>,
) -> RecentActivity {
    let cutoff = now - Duration::hours(1);
    RecentActivity {
        mentions_last_hour: mentions.iter().filter(|m| m.timestamp > cutoff).count(),
        messages_last_hour: messages.iter().filter(|m| m.timestamp > cutoff).count(),
    }
}
