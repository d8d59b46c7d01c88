use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::FixedOffset;
use chrono_tz::Tz;

use crate::aggregate::{
    AggregationLimits, DEFAULT_TOP_CONTENT_LIMIT, DEFAULT_TRENDING_LIMIT, LocalZone,
};
use crate::aggregate::feed::{
    DEFAULT_FEED_LIMIT, DEFAULT_FEED_MENTION_SAMPLE, DEFAULT_FEED_MESSAGE_SAMPLE, FeedSample,
};
use crate::error::AnalyticsError;

#[derive(Debug, Clone)]
pub struct Settings {
    /// JSON snapshot to aggregate
    pub snapshot_path: PathBuf,
    pub limits: AggregationLimits,
    /// Zone used as "local time" for hour-of-day bucketing
    pub local_zone: LocalZone,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        validate_path(&self.snapshot_path)?;
        validate_limit("PULSE_TOP_CONTENT_LIMIT", self.limits.top_content)?;
        validate_limit("PULSE_TRENDING_LIMIT", self.limits.trending_hashtags)?;
        validate_limit("PULSE_FEED_LIMIT", self.limits.feed.limit)?;
        validate_limit("PULSE_FEED_MENTION_SAMPLE", self.limits.feed.mentions)?;
        validate_limit("PULSE_FEED_MESSAGE_SAMPLE", self.limits.feed.messages)?;
        Ok(())
    }
}

fn validate_path(path: &std::path::Path) -> Result<(), AnalyticsError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(AnalyticsError::Config("Snapshot path cannot be empty".into()));
    }
    Ok(())
}

/// Validates that a limit selects at least one item.
fn validate_limit(name: &str, value: usize) -> Result<(), AnalyticsError> {
    if value == 0 {
        return Err(AnalyticsError::Config(format!("{name} must be at least 1")));
    }
    Ok(())
}

fn parse_opt<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, AnalyticsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AnalyticsError::Config(format!("Invalid {name}={raw}: {e}")))
        })
        .transpose()
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AnalyticsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, name)?.unwrap_or(default))
}

/// IANA zone (`PULSE_TIMEZONE`), pinned offset (`PULSE_UTC_OFFSET`), or the
/// host's local zone when neither is set.
fn local_zone_from(lookup: &impl Fn(&str) -> Option<String>) -> Result<LocalZone, AnalyticsError> {
    let named: Option<Tz> = parse_opt(lookup, "PULSE_TIMEZONE")?;
    let fixed: Option<FixedOffset> = parse_opt(lookup, "PULSE_UTC_OFFSET")?;

    match (named, fixed) {
        (Some(_), Some(_)) => Err(AnalyticsError::Config(
            "Set only one of PULSE_TIMEZONE and PULSE_UTC_OFFSET".into(),
        )),
        (Some(tz), None) => Ok(LocalZone::Named(tz)),
        (None, Some(offset)) => Ok(LocalZone::Fixed(offset)),
        (None, None) => Ok(LocalZone::Host),
    }
}

pub fn get_configuration() -> Result<Settings, AnalyticsError> {
    settings_from(|name| env::var(name).ok())
}

/// Build settings from an arbitrary variable lookup.
pub fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings, AnalyticsError> {
    let snapshot_path = lookup("PULSE_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .ok_or_else(|| {
            AnalyticsError::Config("Missing required environment variable: PULSE_SNAPSHOT_PATH".into())
        })?;

    let limits = AggregationLimits {
        top_content: parse_or(&lookup, "PULSE_TOP_CONTENT_LIMIT", DEFAULT_TOP_CONTENT_LIMIT)?,
        trending_hashtags: parse_or(&lookup, "PULSE_TRENDING_LIMIT", DEFAULT_TRENDING_LIMIT)?,
        feed: FeedSample {
            mentions: parse_or(&lookup, "PULSE_FEED_MENTION_SAMPLE", DEFAULT_FEED_MENTION_SAMPLE)?,
            messages: parse_or(&lookup, "PULSE_FEED_MESSAGE_SAMPLE", DEFAULT_FEED_MESSAGE_SAMPLE)?,
            limit: parse_or(&lookup, "PULSE_FEED_LIMIT", DEFAULT_FEED_LIMIT)?,
        },
    };

    let local_zone = local_zone_from(&lookup)?;

    let settings = Settings {
        snapshot_path,
        limits,
        local_zone,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
