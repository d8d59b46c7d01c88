use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MentionRecord, MessageRecord};

/// A record of either source shape, tagged once at ingestion.
///
/// The tag replaces probing for `platform` / `channel` fields at merge time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedRecord {
    Mention(MentionRecord),
    Message(MessageRecord),
}

impl FeedRecord {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            FeedRecord::Mention(m) => &m.id,
            FeedRecord::Message(m) => &m.id,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            FeedRecord::Mention(m) => m.timestamp,
            FeedRecord::Message(m) => m.timestamp,
        }
    }

    /// Platform for mentions, channel for messages.
    #[must_use]
    pub fn source_label(&self) -> &str {
        match self {
            FeedRecord::Mention(m) => &m.platform,
            FeedRecord::Message(m) => &m.channel,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            FeedRecord::Mention(m) => &m.content.text,
            FeedRecord::Message(m) => &m.message,
        }
    }

    #[must_use]
    pub fn sentiment_score(&self) -> f64 {
        match self {
            FeedRecord::Mention(m) => m.sentiment.score,
            FeedRecord::Message(m) => m.sentiment_score,
        }
    }

    #[must_use]
    pub fn emotion(&self) -> &str {
        match self {
            FeedRecord::Mention(m) => &m.sentiment.emotion,
            FeedRecord::Message(m) => &m.emotion,
        }
    }
}

impl From<MentionRecord> for FeedRecord {
    fn from(record: MentionRecord) -> Self {
        FeedRecord::Mention(record)
    }
}

impl From<MessageRecord> for FeedRecord {
    fn from(record: MessageRecord) -> Self {
        FeedRecord::Message(record)
    }
}
