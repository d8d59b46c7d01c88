use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public social-style mention, validated at ingestion.
///
/// Field names serialize in camelCase so that a validated record round-trips
/// through the same JSON shape the data-acquisition side produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRecord {
    pub id: String,
    pub platform: String,
    pub timestamp: DateTime<Utc>,
    pub author: Author,
    pub content: Content,
    pub sentiment: Sentiment,
    pub metrics: EngagementMetrics,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
}

/// Pre-computed sentiment. `score` is nominally in [-1, 1] but not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: f64,
    pub emotion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub reach: u64,
}

impl EngagementMetrics {
    /// Ranking proxy for top content: likes + shares.
    #[must_use]
    pub fn engagement_score(&self) -> u64 {
        self.likes.saturating_add(self.shares)
    }

    /// Every interaction counted on the engagement KPI, comments included.
    #[must_use]
    pub fn interactions(&self) -> u64 {
        self.likes
            .saturating_add(self.shares)
            .saturating_add(self.comments)
    }
}

impl MentionRecord {
    #[must_use]
    pub fn engagement_score(&self) -> u64 {
        self.metrics.engagement_score()
    }
}
