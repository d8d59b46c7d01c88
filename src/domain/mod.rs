pub mod feed;
pub mod mention;
pub mod message;
pub mod views;

pub use feed::FeedRecord;
pub use mention::{Author, Content, EngagementMetrics, MentionRecord, Sentiment};
pub use message::MessageRecord;
pub use views::{
    ChannelPerformance, DashboardViews, DistributionEntry, EngagementTotals, GroupMean,
    HashtagCount, HourlyBucket, PlatformShare, Polarity, RankedMention, RecentActivity,
    SentimentClass, SentimentDistribution, UnifiedFeedItem,
};
