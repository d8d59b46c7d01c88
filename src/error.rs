use thiserror::Error;

/// Placeholder id used when a raw record is missing its own identifier.
pub const UNKNOWN_RECORD_ID: &str = "<unknown>";

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Record {record_id} is missing required field `{field}`")]
    MissingField {
        record_id: String,
        field: &'static str,
    },

    #[error("Record {record_id} exposes neither `platform` nor `channel`")]
    UnclassifiableRecord { record_id: String },

    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to read snapshot {path}: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalyticsError {
    pub(crate) fn missing(record_id: Option<&str>, field: &'static str) -> Self {
        AnalyticsError::MissingField {
            record_id: record_id.unwrap_or(UNKNOWN_RECORD_ID).to_string(),
            field,
        }
    }
}
