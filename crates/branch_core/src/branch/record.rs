//! Branch record - An independently appendable fork of a conversation
//!
//! Branches of one conversation form a forest: each branch has at most one
//! parent and roots have none. A branch references, but does not own, its
//! parent; shared prefixes are logical, not copied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Minimum accepted branch name length, in characters.
pub const MIN_BRANCH_NAME_LEN: usize = 2;

/// Maximum accepted branch name length, in characters.
pub const MAX_BRANCH_NAME_LEN: usize = 100;

/// A forkable, appendable timeline within a conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Opaque unique identifier.
    pub id: String,

    /// The root conversation this branch belongs to.
    pub conversation_id: String,

    /// Branch this one was forked from (None for root branches).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_branch_id: Option<String>,

    /// Display name (2-100 chars, letters/digits/space/hyphen/underscore).
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Index into the parent branch's messages marking the fork point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from_message_index: Option<usize>,

    /// Cached count of messages appended to this branch. Must equal the
    /// live message count at all times.
    pub message_count: usize,

    /// True while the branch has at least one live reference.
    pub is_active: bool,

    /// Free-form labels, no uniqueness constraint.
    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,

    /// Refreshed on any message append, participant change, or rename.
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Create a new branch with a fresh id and zero messages.
    ///
    /// Fails if the name does not satisfy the format rule or the
    /// conversation id is empty.
    pub fn new(
        conversation_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        created_from_message_index: Option<usize>,
        parent_branch_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        let conversation_id = conversation_id.into();
        if conversation_id.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "conversation id",
            });
        }

        let name = name.into();
        validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            conversation_id,
            parent_branch_id,
            name,
            description: description.into(),
            created_from_message_index,
            message_count: 0,
            is_active: true,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if this is a root branch (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_branch_id.is_none()
    }

    /// Account for one appended message: bump the cached count and refresh
    /// `updated_at`. The message itself is written through the store.
    pub fn record_append(&mut self) {
        self.message_count += 1;
        self.updated_at = Utc::now();
    }

    /// Rename the branch, re-validating the new name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Attach a free-form label.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Mark the branch inactive (e.g. after it was merged away).
    /// The record itself is never deleted here.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    let charset_ok = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if len < MIN_BRANCH_NAME_LEN || len > MAX_BRANCH_NAME_LEN || !charset_ok {
        return Err(ValidationError::InvalidBranchName {
            name: name.to_string(),
        });
    }
    Ok(())
}
