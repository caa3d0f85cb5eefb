//! BranchMessage - A single message within a branch timeline
//!
//! Message content is immutable once created. Within a branch the
//! `message_index` values form a contiguous run 0..n-1; the comparison
//! logic in the engine crate relies on that ordering invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Optional model/usage annotations. Informational only; never consulted
/// by the branching logic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
}

/// One message at a fixed position within a branch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BranchMessage {
    /// Opaque unique identifier.
    pub id: String,

    pub branch_id: String,

    pub conversation_id: String,

    pub role: MessageRole,

    /// Message text, immutable once created.
    pub content: String,

    /// Zero-based position within the branch.
    pub message_index: usize,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl BranchMessage {
    /// Create a new message with a fresh id.
    ///
    /// The caller supplies the next `message_index` (equal to the branch's
    /// current `message_count`); creation and persistence are decoupled, so
    /// the index is not auto-incremented here.
    pub fn new(
        branch_id: impl Into<String>,
        conversation_id: impl Into<String>,
        role: MessageRole,
        content: impl Into<String>,
        message_index: usize,
        metadata: Option<MessageMetadata>,
    ) -> Result<Self, ValidationError> {
        let branch_id = branch_id.into();
        if branch_id.is_empty() {
            return Err(ValidationError::EmptyField { field: "branch id" });
        }
        let conversation_id = conversation_id.into();
        if conversation_id.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "conversation id",
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            branch_id,
            conversation_id,
            role,
            content: content.into(),
            message_index,
            timestamp: Utc::now(),
            metadata,
        })
    }
}

/// Assert the contiguity invariant: `message_index` values are exactly
/// `0..n-1` in sequence order. Stores and callers run this at the boundary;
/// the pure comparison functions trust their inputs.
pub fn check_message_order(messages: &[BranchMessage]) -> Result<(), ValidationError> {
    for (position, message) in messages.iter().enumerate() {
        if message.message_index != position {
            return Err(ValidationError::NonContiguousIndex {
                position,
                found: message.message_index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(index: usize) -> BranchMessage {
        BranchMessage::new("b1", "c1", MessageRole::User, "hello", index, None).unwrap()
    }

    #[test]
    fn new_message_rejects_empty_ids() {
        assert!(matches!(
            BranchMessage::new("", "c1", MessageRole::User, "hi", 0, None),
            Err(ValidationError::EmptyField { field: "branch id" })
        ));
        assert!(matches!(
            BranchMessage::new("b1", "", MessageRole::User, "hi", 0, None),
            Err(ValidationError::EmptyField {
                field: "conversation id"
            })
        ));
    }

    #[test]
    fn contiguous_run_passes_order_check() {
        let messages: Vec<_> = (0..5).map(message).collect();
        assert!(check_message_order(&messages).is_ok());
        assert!(check_message_order(&[]).is_ok());
    }

    #[test]
    fn gap_or_duplicate_fails_order_check() {
        let with_gap = vec![message(0), message(2)];
        assert_eq!(
            check_message_order(&with_gap),
            Err(ValidationError::NonContiguousIndex {
                position: 1,
                found: 2
            })
        );

        let with_duplicate = vec![message(0), message(0)];
        assert!(check_message_order(&with_duplicate).is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        let role: MessageRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, MessageRole::User);
    }

    #[test]
    fn metadata_round_trips_camel_case() {
        let metadata = MessageMetadata {
            model: Some("gpt-4".into()),
            temperature: Some(0.7),
            token_count: Some(128),
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["tokenCount"], 128);
        let back: MessageMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }
}
