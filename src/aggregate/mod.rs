//! Aggregation engine
//!
//! Each submodule is a pure transform over an immutable snapshot. The engine
//! only bundles them into one pass; it keeps no state between calls, so every
//! invocation is a full recomputation.

pub mod channel;
pub mod distribution;
pub mod engagement;
pub mod feed;
pub mod frequency;
pub mod hourly;
pub mod ranking;
pub mod sentiment;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{DashboardViews, MentionRecord, MessageRecord};
use crate::ingest::Snapshot;

pub use feed::FeedSample;
pub use hourly::LocalZone;

pub const DEFAULT_TOP_CONTENT_LIMIT: usize = 5;
pub const DEFAULT_TRENDING_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationLimits {
    pub top_content: usize,
    pub trending_hashtags: usize,
    pub feed: FeedSample,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            top_content: DEFAULT_TOP_CONTENT_LIMIT,
            trending_hashtags: DEFAULT_TRENDING_LIMIT,
            feed: FeedSample::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationEngine {
    limits: AggregationLimits,
    /// Zone that defines "local time" for hour-of-day bucketing.
    local_zone: LocalZone,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(AggregationLimits::default(), LocalZone::Host)
    }
}

impl AggregationEngine {
    #[must_use]
    pub fn new(limits: AggregationLimits, local_zone: LocalZone) -> Self {
        Self { limits, local_zone }
    }

    /// Compute every dashboard view over one snapshot.
    ///
    /// `now` anchors the last-hour activity counts only.
    #[tracing::instrument(
        name = "build_dashboard",
        skip_all,
        fields(mentions = mentions.len(), messages = messages.len())
    )]
    pub fn build_dashboard(
        &self,
        mentions: &[MentionRecord],
        messages: &[MessageRecord],
        now: DateTime<Utc>,
    ) -> DashboardViews {
        let views = DashboardViews {
            platform_distribution: distribution::platform_distribution(mentions),
            sentiment_distribution: sentiment::sentiment_distribution(mentions),
            hourly_activity: self.local_zone.hourly_activity(mentions),
            channel_performance: channel::channel_performance(messages),
            top_content: ranking::top_content(mentions, self.limits.top_content),
            trending_hashtags: frequency::trending_hashtags(
                mentions,
                self.limits.trending_hashtags,
            ),
            unified_feed: feed::unified_feed(mentions, messages, self.limits.feed),
            engagement: engagement::engagement_totals(mentions),
            recent_activity: engagement::recent_activity(mentions, messages, now),
        };

        debug!(
            platforms = views.platform_distribution.len(),
            hours = views.hourly_activity.len(),
            channels = views.channel_performance.len(),
            "Computed dashboard views"
        );
        info!(
            "Built dashboard from {} mentions and {} messages",
            mentions.len(),
            messages.len()
        );

        views
    }

    pub fn build_from_snapshot(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> DashboardViews {
        self.build_dashboard(&snapshot.mentions, &snapshot.messages, now)
    }
}
