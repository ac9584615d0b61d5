//! Wire types for the command-and-control messaging API: message, recipient,
//! reply, and the paginated list pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Request body for creating a message under a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub command_id: String,
    /// Values substituted into the command's payload template, keyed by parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_param_values: Option<HashMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<MessageTargets>,
}

/// Addressing for a message: individual things and/or thing groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTargets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thing_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thing_group_names: Option<Vec<String>>,
}

/// A message resource as returned by the service. `id` is opaque; timestamps
/// travel as epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub command_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<MessageTargets>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Delivery state of a message for a single target thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub thing_name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// A response a recipient sent back for a message. `received_at` (epoch
/// milliseconds) doubles as the pagination cursor when listing replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub received_at: i64,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Pagination block of a list page: the exclusive-start cursor marking the
/// last item of this page, plus the page size that was applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<C> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated: Option<C>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Cursor for recipient pages: the name of the last recipient seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientCursor {
    pub thing_name: String,
}

/// Cursor for reply pages: the receive timestamp of the last reply seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCursor {
    pub received_at: i64,
}

/// One page of a message's recipients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientListPage {
    pub recipients: Vec<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination<RecipientCursor>>,
}

/// One page of a single recipient's replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyListPage {
    pub replies: Vec<Reply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination<ReplyCursor>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_serializes_camel_case() {
        let message = NewMessage {
            command_id: "cmd-42".to_string(),
            payload_param_values: None,
            targets: Some(MessageTargets {
                thing_names: Some(vec!["thing-1".to_string()]),
                thing_group_names: None,
            }),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["commandId"], "cmd-42");
        assert_eq!(json["targets"]["thingNames"][0], "thing-1");
        // Absent optional fields are omitted, not serialized as null
        assert!(json.get("payloadParamValues").is_none());
        assert!(json["targets"].get("thingGroupNames").is_none());
    }

    #[test]
    fn test_message_timestamps_from_epoch_millis() {
        let json = r#"{
            "id": "msg-1",
            "commandId": "cmd-42",
            "status": "awaiting_replies",
            "createdAt": 1700000000000
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.created_at.unwrap().timestamp_millis(), 1700000000000);
        assert!(message.updated_at.is_none());
    }

    #[test]
    fn test_recipient_page_with_pagination() {
        let json = r#"{
            "recipients": [
                {"thingName": "thing-1", "status": "success"},
                {"thingName": "thing-2", "status": "pending", "correlationId": "corr-9"}
            ],
            "pagination": {"lastEvaluated": {"thingName": "thing-2"}, "count": 2}
        }"#;
        let page: RecipientListPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.recipients.len(), 2);
        assert_eq!(page.recipients[1].correlation_id.as_deref(), Some("corr-9"));
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.last_evaluated.unwrap().thing_name, "thing-2");
        assert_eq!(pagination.count, Some(2));
    }

    #[test]
    fn test_reply_page_without_pagination() {
        let json = r#"{
            "replies": [
                {"receivedAt": 1700000001234, "action": "accepted", "payload": {"ok": true}}
            ]
        }"#;
        let page: ReplyListPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.replies[0].received_at, 1700000001234);
        assert_eq!(page.replies[0].action, "accepted");
        assert!(page.pagination.is_none());
    }
}
