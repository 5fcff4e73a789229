/// In-memory dataset handed to the core by the data-access layer.
///
/// A snapshot is fetched fresh per request and never mutated here. Follow
/// relationships are stored as one directed edge set; the following and
/// followers views are both derived from it, so the two directions cannot
/// diverge.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StatsError;
use crate::feed;
use crate::model::{Credentials, FollowEdge, Message, User, UserId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub follows: Vec<FollowEdge>,
}

impl Snapshot {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))?;

        snapshot.validate()?;
        tracing::debug!(
            users = snapshot.users.len(),
            messages = snapshot.messages.len(),
            follows = snapshot.follows.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Checks the dataset invariants the core relies on: every message has
    /// an existing author and non-empty content, every follow edge joins
    /// two existing distinct users.
    pub fn validate(&self) -> Result<(), StatsError> {
        for message in &self.messages {
            self.user(message.author)?;
            if message.content.is_empty() {
                return Err(StatsError::EmptyMessage(message.id));
            }
        }
        for edge in &self.follows {
            if edge.follower == edge.following {
                return Err(StatsError::SelfFollow(edge.follower));
            }
            self.user(edge.follower)?;
            self.user(edge.following)?;
        }
        Ok(())
    }

    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    pub fn all_messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn user(&self, id: UserId) -> Result<&User, StatsError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(StatsError::UnknownUser(id))
    }

    /// Users `id` follows, in edge insertion order.
    pub fn following_of(&self, id: UserId) -> Vec<&User> {
        self.follows
            .iter()
            .filter(|edge| edge.follower == id)
            .filter_map(|edge| self.user(edge.following).ok())
            .collect()
    }

    /// Users following `id`, in edge insertion order.
    pub fn followers_of(&self, id: UserId) -> Vec<&User> {
        self.follows
            .iter()
            .filter(|edge| edge.following == id)
            .filter_map(|edge| self.user(edge.follower).ok())
            .collect()
    }

    /// Messages authored by `id`, oldest first.
    pub fn messages_of(&self, id: UserId) -> Vec<&Message> {
        let mut authored: Vec<&Message> = self
            .messages
            .iter()
            .filter(|message| message.author == id)
            .collect();
        authored.sort_by_key(|message| message.created_at);
        authored
    }

    /// Assembles the feed for `id`: the full history of everyone they
    /// follow, oldest first.
    pub fn feed_for(&self, id: UserId) -> Result<Vec<Message>, StatsError> {
        self.user(id)?;
        let followed = self.following_of(id);
        Ok(feed::assemble_feed(&followed, &self.messages))
    }

    /// Resolves typed credentials to a user. The caller passes the returned
    /// id explicitly into later calls; there is no ambient logged-in user.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<&User, StatsError> {
        self.users
            .iter()
            .find(|user| user.email == credentials.email)
            .filter(|user| user.password == credentials.password)
            .ok_or(StatsError::InvalidCredentials)
    }
}
