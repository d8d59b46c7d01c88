//! Threshold-band sentiment classification.

use crate::domain::{MentionRecord, SentimentClass, SentimentDistribution};

/// Scores within `[-BAND, BAND]` are treated as noise and classed neutral.
pub const NEUTRAL_BAND: f64 = 0.1;

#[must_use]
pub fn classify(score: f64) -> SentimentClass {
    if score > NEUTRAL_BAND {
        SentimentClass::Positive
    } else if score < -NEUTRAL_BAND {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    }
}

pub fn sentiment_distribution(mentions: &[MentionRecord]) -> SentimentDistribution {
    mentions
        .iter()
        .fold(SentimentDistribution::default(), |mut acc, m| {
            match classify(m.sentiment.score) {
                SentimentClass::Positive => acc.positive += 1,
                SentimentClass::Negative => acc.negative += 1,
                SentimentClass::Neutral => acc.neutral += 1,
            }
            acc
        })
}
