//! Derived views handed to the presentation side.
//!
//! Every view is freshly allocated per aggregation pass and carries no
//! references back into the input snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MentionRecord;

/// One categorical bucket with its share of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub key: String,
    pub count: usize,
    /// `count / total * 100`, or 0 when the collection is empty.
    pub percentage: f64,
}

/// Share of mentions on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformShare {
    pub platform: String,
    pub count: usize,
    pub percentage: f64,
}

impl From<DistributionEntry> for PlatformShare {
    fn from(entry: DistributionEntry) -> Self {
        PlatformShare {
            platform: entry.key,
            count: entry.count,
            percentage: entry.percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    #[must_use]
    pub fn count(&self, class: SentimentClass) -> usize {
        match class {
            SentimentClass::Positive => self.positive,
            SentimentClass::Negative => self.negative,
            SentimentClass::Neutral => self.neutral,
        }
    }

    /// Fixed positive, negative, neutral ordering used by pie charts.
    #[must_use]
    pub fn buckets(&self) -> [(SentimentClass, usize); 3] {
        [
            (SentimentClass::Positive, self.positive),
            (SentimentClass::Negative, self.negative),
            (SentimentClass::Neutral, self.neutral),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyBucket {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// 24-hour clock label, e.g. `"9:00"`.
    pub label: String,
    pub mention_count: usize,
    pub average_sentiment: f64,
}

/// Running mean of a numeric field for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMean {
    pub key: String,
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

/// Message volume and mean sentiment for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPerformance {
    pub channel: String,
    pub count: usize,
    pub average_sentiment_score: f64,
}

impl From<GroupMean> for ChannelPerformance {
    fn from(group: GroupMean) -> Self {
        ChannelPerformance {
            channel: group.key,
            count: group.count,
            average_sentiment_score: group.average,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMention {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub engagement: u64,
    pub mention: MentionRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCount {
    pub tag: String,
    pub count: usize,
}

/// Sign of a sentiment score, used for feed item badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Normalized envelope over both record shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedFeedItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source_label: String,
    pub text: String,
    pub sentiment_score: f64,
    pub emotion: String,
    pub polarity: Polarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTotals {
    /// Sum of likes, shares and comments.
    pub total_engagement: u64,
    pub total_reach: u64,
    pub average_sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub mentions_last_hour: usize,
    pub messages_last_hour: usize,
}

/// Every view of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub platform_distribution: Vec<PlatformShare>,
    pub sentiment_distribution: SentimentDistribution,
    pub hourly_activity: Vec<HourlyBucket>,
    pub channel_performance: Vec<ChannelPerformance>,
    pub top_content: Vec<RankedMention>,
    pub trending_hashtags: Vec<HashtagCount>,
    pub unified_feed: Vec<UnifiedFeedItem>,
    pub engagement: EngagementTotals,
    pub recent_activity: RecentActivity,
}
