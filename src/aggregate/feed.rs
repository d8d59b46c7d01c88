//! Unified chronological feed over mentions and messages.

use crate::domain::{FeedRecord, MentionRecord, MessageRecord, Polarity, UnifiedFeedItem};

pub const DEFAULT_FEED_MENTION_SAMPLE: usize = 3;
pub const DEFAULT_FEED_MESSAGE_SAMPLE: usize = 2;
pub const DEFAULT_FEED_LIMIT: usize = 8;

/// Recent-sample policy: only the first `mentions` / `messages` records of
/// each collection are merged, and at most `limit` items are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSample {
    pub mentions: usize,
    pub messages: usize,
    pub limit: usize,
}

impl Default for FeedSample {
    fn default() -> Self {
        Self {
            mentions: DEFAULT_FEED_MENTION_SAMPLE,
            messages: DEFAULT_FEED_MESSAGE_SAMPLE,
            limit: DEFAULT_FEED_LIMIT,
        }
    }
}

impl From<&FeedRecord> for UnifiedFeedItem {
    fn from(record: &FeedRecord) -> Self {
        let score = record.sentiment_score();
        UnifiedFeedItem {
            id: record.id().to_string(),
            timestamp: record.timestamp(),
            source_label: record.source_label().to_string(),
            text: record.text().to_string(),
            sentiment_score: score,
            emotion: record.emotion().to_string(),
            polarity: Polarity::of(score),
        }
    }
}

/// Normalize tagged records, newest first, truncated to `limit`.
///
/// Records with equal timestamps keep their input order.
pub fn merge_feed<'a, I>(records: I, limit: usize) -> Vec<UnifiedFeedItem>
where
    I: IntoIterator<Item = &'a FeedRecord>,
{
    let mut items: Vec<UnifiedFeedItem> = records.into_iter().map(UnifiedFeedItem::from).collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(limit);
    items
}

pub fn unified_feed(
    mentions: &[MentionRecord],
    messages: &[MessageRecord],
    sample: FeedSample,
) -> Vec<UnifiedFeedItem> {
    let sampled: Vec<FeedRecord> = mentions
        .iter()
        .take(sample.mentions)
        .cloned()
        .map(FeedRecord::from)
        .chain(
            messages
                .iter()
                .take(sample.messages)
                .cloned()
                .map(FeedRecord::from),
        )
        .collect();

    merge_feed(&sampled, sample.limit)
}
