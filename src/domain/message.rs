use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer communication received on a support channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub channel: String,
    pub message: String,
    pub sentiment_score: f64,
    pub emotion: String,
}
