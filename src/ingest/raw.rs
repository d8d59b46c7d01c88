//! Wire-level record shapes as produced by the data-acquisition side.
//!
//! Every field is optional here so that a missing field surfaces as a
//! `MissingField` error naming the dotted path, instead of a serde message or
//! a silently defaulted value.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Author, Content, EngagementMetrics, MentionRecord, MessageRecord, Sentiment};
use crate::error::AnalyticsError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMention {
    pub id: Option<String>,
    pub platform: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub author: Option<RawAuthor>,
    pub content: Option<RawContent>,
    pub sentiment: Option<RawSentiment>,
    pub metrics: Option<RawMetrics>,
    pub hashtags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthor {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContent {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSentiment {
    pub score: Option<f64>,
    pub emotion: Option<String>,
}

/// Engagement counters; an absent counter means nothing was recorded.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawMetrics {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reach: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    pub id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub channel: Option<String>,
    pub message: Option<String>,
    pub sentiment_score: Option<f64>,
    pub emotion: Option<String>,
}

fn required<T>(value: Option<T>, id: Option<&str>, field: &'static str) -> Result<T, AnalyticsError> {
    value.ok_or_else(|| AnalyticsError::missing(id, field))
}

impl TryFrom<RawMention> for MentionRecord {
    type Error = AnalyticsError;

    fn try_from(raw: RawMention) -> Result<Self, Self::Error> {
        let id = required(raw.id, None, "id")?;
        let rid = Some(id.as_str());

        let platform = required(raw.platform, rid, "platform")?;
        let timestamp = required(raw.timestamp, rid, "timestamp")?;
        let author = required(raw.author, rid, "author")?;
        let display_name = required(author.display_name, rid, "author.displayName")?;
        let content = required(raw.content, rid, "content")?;
        let text = required(content.text, rid, "content.text")?;
        let sentiment = required(raw.sentiment, rid, "sentiment")?;
        let score = required(sentiment.score, rid, "sentiment.score")?;
        let emotion = required(sentiment.emotion, rid, "sentiment.emotion")?;
        let metrics = raw.metrics.unwrap_or_default();

        Ok(MentionRecord {
            id,
            platform,
            timestamp,
            author: Author { display_name },
            content: Content { text },
            sentiment: Sentiment { score, emotion },
            metrics: EngagementMetrics {
                likes: metrics.likes,
                shares: metrics.shares,
                comments: metrics.comments,
                reach: metrics.reach,
            },
            hashtags: raw.hashtags.unwrap_or_default(),
        })
    }
}

impl TryFrom<RawMessage> for MessageRecord {
    type Error = AnalyticsError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let id = required(raw.id, None, "id")?;
        let rid = Some(id.as_str());

        Ok(MessageRecord {
            timestamp: required(raw.timestamp, rid, "timestamp")?,
            channel: required(raw.channel, rid, "channel")?,
            message: required(raw.message, rid, "message")?,
            sentiment_score: required(raw.sentiment_score, rid, "sentimentScore")?,
            emotion: required(raw.emotion, rid, "emotion")?,
            id,
        })
    }
}
