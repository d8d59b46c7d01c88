//! Structural classification of untagged records.
//!
//! The two source shapes carry no discriminant of their own, so the tag is
//! derived here, once, from field presence: `platform` marks a mention,
//! `channel` marks a message. Nothing downstream probes fields again.

use serde_json::Value;

use crate::domain::{FeedRecord, MentionRecord, MessageRecord};
use crate::error::{AnalyticsError, UNKNOWN_RECORD_ID};

use super::raw::{RawMention, RawMessage};

/// Tag an untagged record. `platform` wins when both fields are present.
pub fn classify_record(value: Value) -> Result<FeedRecord, AnalyticsError> {
    if value.get("platform").is_some() {
        let raw: RawMention = serde_json::from_value(value)?;
        return Ok(FeedRecord::Mention(MentionRecord::try_from(raw)?));
    }
    if value.get("channel").is_some() {
        let raw: RawMessage = serde_json::from_value(value)?;
        return Ok(FeedRecord::Message(MessageRecord::try_from(raw)?));
    }

    let record_id = value
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_RECORD_ID)
        .to_string();
    Err(AnalyticsError::UnclassifiableRecord { record_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_platform_field_marks_mention() {
        let record = classify_record(json!({
            "id": "m-1",
            "platform": "twitter",
            "timestamp": "2024-05-01T09:00:00Z",
            "author": { "displayName": "Grace" },
            "content": { "text": "hello" },
            "sentiment": { "score": 0.2, "emotion": "joy" }
        }))
        .unwrap();
        assert!(matches!(record, FeedRecord::Mention(_)));
        assert_eq!(record.source_label(), "twitter");
        assert_eq!(record.text(), "hello");
    }

    #[test]
    fn test_channel_field_marks_message() {
        let record = classify_record(json!({
            "id": "s-1",
            "channel": "chat",
            "timestamp": "2024-05-01T09:00:00Z",
            "message": "refund please",
            "sentimentScore": -0.4,
            "emotion": "anger"
        }))
        .unwrap();
        assert!(matches!(record, FeedRecord::Message(_)));
        assert_eq!(record.source_label(), "chat");
        assert_eq!(record.emotion(), "anger");
    }

    #[test]
    fn test_neither_field_is_rejected() {
        let err = classify_record(json!({ "id": "x-9", "text": "?" })).unwrap_err();
        match err {
            AnalyticsError::UnclassifiableRecord { record_id } => assert_eq!(record_id, "x-9"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mention_shape_with_missing_field_is_not_guessed_as_message() {
        let err = classify_record(json!({
            "id": "m-2",
            "platform": "reddit",
            "channel": "chat",
            "timestamp": "2024-05-01T09:00:00Z"
        }))
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingField { field: "author", .. }));
    }
}
