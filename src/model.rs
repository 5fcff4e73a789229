/// Domain entities shared across the statistics and feed modules.
///
/// Users and messages arrive from the data-access layer already resolved:
/// every message carries its author id, and follow relationships are stored
/// as a single directed edge set (see `snapshot.rs` for the derived views).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identity assigned by the data-access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque message identity assigned by the data-access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name shown in rankings and feeds.
    pub name: String,
    /// Handle, unique per dataset.
    pub username: String,
    pub email: String,
    /// Stored secret as provided by the data-access layer. Hashing is the
    /// collaborator's concern; this crate only compares for equality.
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Free-text content, never empty.
    pub content: String,
    /// Creation time, normalized to UTC by the data-access layer. All
    /// bucketing and feed ordering uses this stored value directly.
    pub created_at: DateTime<Utc>,
    pub author: UserId,
    /// Set when the message was edited after creation. Not used by any
    /// statistic, carried for presentation.
    #[serde(default)]
    pub edited: bool,
}

/// One directed follow edge: `follower` sees `following`'s messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower: UserId,
    pub following: UserId,
}

/// Typed login payload, validated at the boundary instead of the loose
/// key-value form the web layer receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
