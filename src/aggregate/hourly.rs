//! Hour-of-day activity buckets.
//!
//! Buckets are keyed by the calendar hour of each mention in the supplied
//! time zone across the whole snapshot. This is not a trailing 24h window.

use chrono::{FixedOffset, Local, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::domain::{HourlyBucket, MentionRecord};

const HOURS_PER_DAY: usize = 24;

/// Zone whose wall clock defines "hour of day".
///
/// `Host` and `Named` resolve the offset per timestamp, so mentions on either
/// side of a DST change land in their own local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    #[default]
    Host,
    Named(Tz),
    Fixed(FixedOffset),
}

impl LocalZone {
    pub fn hourly_activity(&self, mentions: &[MentionRecord]) -> Vec<HourlyBucket> {
        match self {
            LocalZone::Host => hourly_activity(mentions, &Local),
            LocalZone::Named(tz) => hourly_activity(mentions, tz),
            LocalZone::Fixed(offset) => hourly_activity(mentions, offset),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HourAccumulator {
    count: usize,
    sentiment_total: f64,
}

impl HourAccumulator {
    fn add(&mut self, score: f64) {
        self.count += 1;
        self.sentiment_total += score;
    }
}

/// Mention count and mean sentiment per hour of day in `tz`.
///
/// Only hours with at least one mention are emitted, ascending by hour.
pub fn hourly_activity<Z: TimeZone>(mentions: &[MentionRecord], tz: &Z) -> Vec<HourlyBucket> {
    let mut hours = [HourAccumulator::default(); HOURS_PER_DAY];

    for m in mentions {
        let hour = m.timestamp.with_timezone(tz).hour() as usize;
        hours[hour].add(m.sentiment.score);
    }

    hours
        .iter()
        .enumerate()
        .filter(|(_, acc)| acc.count > 0)
        .map(|(hour, acc)| HourlyBucket {
            hour: hour as u32,
            label: hour_label(hour as u32),
            mention_count: acc.count,
            average_sentiment: acc.sentiment_total / acc.count as f64,
        })
        .collect()
}

/// 24-hour clock label without zero padding, e.g. `"9:00"`, `"14:00"`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use crate::test_support::{mention, ts};
    use chrono::Utc;
    use chrono_tz::America::New_York;

    fn at(id: &str, timestamp: &str, score: f64) -> MentionRecord {
        MentionRecord {
            timestamp: ts(timestamp),
            sentiment: Sentiment {
                score,
                emotion: "joy".into(),
            },
            ..mention(id)
        }
    }

    #[test]
    fn test_hourly_activity_empty() {
        assert!(hourly_activity(&[], &Utc).is_empty());
    }

    #[test]
    fn test_hourly_activity_numeric_order_not_lexicographic() {
        let mentions = vec![
            at("1", "2024-05-01T10:05:00Z", 0.2),
            at("2", "2024-05-01T09:30:00Z", 0.4),
            at("3", "2024-05-02T10:45:00Z", -0.6),
        ];
        let buckets = hourly_activity(&mentions, &Utc);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["9:00", "10:00"]);

        assert_eq!(buckets[1].mention_count, 2);
        assert!((buckets[1].average_sentiment - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_hourly_activity_uses_given_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let mentions = vec![at("1", "2024-05-01T23:10:00Z", 0.0)];
        let buckets = hourly_activity(&mentions, &tokyo);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hour, 8);
        assert_eq!(buckets[0].label, "8:00");
    }

    #[test]
    fn test_named_zone_follows_dst() {
        // 12:00Z is 07:00 EST in January and 08:00 EDT in July
        let mentions = vec![
            at("winter", "2026-01-15T12:00:00Z", 0.5),
            at("summer", "2026-07-15T12:00:00Z", -0.5),
        ];
        let buckets = LocalZone::Named(New_York).hourly_activity(&mentions);
        let hours: Vec<(u32, usize)> = buckets.iter().map(|b| (b.hour, b.mention_count)).collect();
        assert_eq!(hours, vec![(7, 1), (8, 1)]);
    }

    #[test]
    fn test_host_zone_converts_each_timestamp() {
        let mentions = vec![
            at("winter", "2026-01-15T12:00:00Z", 0.0),
            at("summer", "2026-07-15T12:00:00Z", 0.0),
        ];
        let mut expected: Vec<u32> = mentions
            .iter()
            .map(|m| m.timestamp.with_timezone(&Local).hour())
            .collect();
        expected.sort_unstable();
        expected.dedup();

        let buckets = LocalZone::Host.hourly_activity(&mentions);
        let hours: Vec<u32> = buckets.iter().map(|b| b.hour).collect();
        assert_eq!(hours, expected);
    }

    #[test]
    fn test_fixed_zone_ignores_dst() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let mentions = vec![
            at("winter", "2026-01-15T12:00:00Z", 0.0),
            at("summer", "2026-07-15T12:00:00Z", 0.0),
        ];
        let buckets = LocalZone::Fixed(offset).hourly_activity(&mentions);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hour, 7);
        assert_eq!(buckets[0].mention_count, 2);
    }

    #[test]
    fn test_hour_label_is_unpadded() {
        assert_eq!(hour_label(0), "0:00");
        assert_eq!(hour_label(23), "23:00");
    }

    mod proptests {
        use super::*;
        use chrono::Duration;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn buckets_strictly_ascending_and_non_empty(
                offsets in proptest::collection::vec(0i64..(7 * 24 * 3600), 0..60)
            ) {
                let base = ts("2024-05-01T00:00:00Z");
                let mentions: Vec<MentionRecord> = offsets
                    .iter()
                    .enumerate()
                    .map(|(i, secs)| MentionRecord {
                        timestamp: base + Duration::seconds(*secs),
                        ..mention(&i.to_string())
                    })
                    .collect();
                let buckets = hourly_activity(&mentions, &Utc);

                prop_assert!(buckets.windows(2).all(|w| w[0].hour < w[1].hour));
                prop_assert!(buckets.iter().all(|b| b.mention_count > 0));
                let total: usize = buckets.iter().map(|b| b.mention_count).sum();
                prop_assert_eq!(total, mentions.len());
            }
        }
    }
}
