//! Shared test support utilities
//!
//! Fixture builders for unit tests. Tests override individual fields with
//! struct update syntax, e.g. `MentionRecord { platform: "reddit".into(), ..mention("m1") }`.

use chrono::{DateTime, Utc};

use crate::domain::{Author, Content, EngagementMetrics, MentionRecord, MessageRecord, Sentiment};

pub(crate) fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub(crate) fn mention(id: &str) -> MentionRecord {
    MentionRecord {
        id: id.to_string(),
        platform: "twitter".to_string(),
        timestamp: ts("2024-05-01T09:15:00Z"),
        author: Author {
            display_name: format!("author-{id}"),
        },
        content: Content {
            text: format!("mention {id}"),
        },
        sentiment: Sentiment {
            score: 0.0,
            emotion: "neutral".to_string(),
        },
        metrics: EngagementMetrics::default(),
        hashtags: Vec::new(),
    }
}

pub(crate) fn scored(id: &str, score: f64) -> MentionRecord {
    MentionRecord {
        sentiment: Sentiment {
            score,
            emotion: "neutral".to_string(),
        },
        ..mention(id)
    }
}

pub(crate) fn engaged(id: &str, likes: u64, shares: u64) -> MentionRecord {
    MentionRecord {
        metrics: EngagementMetrics {
            likes,
            shares,
            ..EngagementMetrics::default()
        },
        ..mention(id)
    }
}

pub(crate) fn tagged(id: &str, hashtags: &[&str]) -> MentionRecord {
    MentionRecord {
        hashtags: hashtags.iter().map(|t| (*t).to_string()).collect(),
        ..mention(id)
    }
}

pub(crate) fn message(id: &str, channel: &str, score: f64) -> MessageRecord {
    MessageRecord {
        id: id.to_string(),
        timestamp: ts("2024-05-01T10:00:00Z"),
        channel: channel.to_string(),
        message: format!("message {id}"),
        sentiment_score: score,
        emotion: "neutral".to_string(),
    }
}
