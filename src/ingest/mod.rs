//! Snapshot ingestion
//!
//! Decodes a JSON snapshot into validated, immutable record collections.
//! Loading is all-or-nothing: the first invalid record aborts the load.

pub mod classify;
pub mod raw;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{FeedRecord, MentionRecord, MessageRecord};
use crate::error::AnalyticsError;

pub use classify::classify_record;
use raw::{RawMention, RawMessage};

#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    mentions: Vec<RawMention>,
    #[serde(default)]
    messages: Vec<RawMessage>,
    /// Untagged records of either shape.
    #[serde(default)]
    records: Vec<serde_json::Value>,
}

/// One materialized, validated input pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub mentions: Vec<MentionRecord>,
    pub messages: Vec<MessageRecord>,
}

impl Snapshot {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| AnalyticsError::Snapshot {
            path: path.display().to_string(),
            source: e,
        })?;
        let snapshot = Self::from_json_str(&body)?;
        info!(
            "Loaded snapshot {} ({} mentions, {} messages)",
            path.display(),
            snapshot.mentions.len(),
            snapshot.messages.len()
        );
        Ok(snapshot)
    }

    pub fn from_json_str(body: &str) -> Result<Self, AnalyticsError> {
        let raw: RawSnapshot = serde_json::from_str(body)?;
        Self::from_raw(raw).inspect_err(|e| warn!("Rejected snapshot record: {e}"))
    }

    fn from_raw(raw: RawSnapshot) -> Result<Self, AnalyticsError> {
        let mut mentions = raw
            .mentions
            .into_iter()
            .map(MentionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut messages = raw
            .messages
            .into_iter()
            .map(MessageRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        for value in raw.records {
            match classify_record(value)? {
                FeedRecord::Mention(m) => mentions.push(m),
                FeedRecord::Message(m) => messages.push(m),
            }
        }

        Ok(Self { mentions, messages })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty() && self.messages.is_empty()
    }
}
