/// Statistics aggregation: the composed view consumed by the presentation
/// layer.
///
/// Every call recomputes from the supplied collections; nothing is cached
/// between requests.
use serde::{Deserialize, Serialize};

#[cfg(test)]
use anyhow::{anyhow, bail, Result};
#[cfg(test)]
use jsonschema::{Draft, JSONSchema};

use crate::busiest_hour::{self, HourBucket};
use crate::error::StatsError;
use crate::model::{Message, User, UserId};
use crate::word_rank::{self, WordCount};

/// How many words the global ranking keeps.
pub const GLOBAL_TOP_WORDS: usize = 10;
/// How many words each per-user ranking keeps.
pub const USER_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCountEntry {
    pub user: UserId,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWordsEntry {
    pub user: UserId,
    pub name: String,
    pub words: Vec<WordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub generated_at: String,
    pub total_messages: u64,
    /// Every user, most messages first. Ties keep fetch order.
    pub message_counts: Vec<MessageCountEntry>,
    /// Global top-10 word ranking.
    pub top_words: Vec<WordCount>,
    /// Word rankings for each user with at least one message, in
    /// message-count rank order.
    pub user_top_words: Vec<UserWordsEntry>,
    pub busiest_hour: HourBucket,
}

/// Builds the aggregate statistics view over a full snapshot.
///
/// `users` and `messages` are consumed in fetch order; that order is the
/// tie-break for equal message counts and the first-occurrence order for
/// equal word counts. An empty message set has no busiest hour, so the
/// whole report fails with `StatsError::EmptyInput`.
pub fn compute_statistics(
    users: &[User],
    messages: &[Message],
) -> Result<StatisticsReport, StatsError> {
    let mut message_counts: Vec<MessageCountEntry> = users
        .iter()
        .map(|user| MessageCountEntry {
            user: user.id,
            name: user.name.clone(),
            count: messages.iter().filter(|m| m.author == user.id).count() as u64,
        })
        .collect();
    message_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let top_words = word_rank::top_words(messages, GLOBAL_TOP_WORDS);

    let user_top_words: Vec<UserWordsEntry> = message_counts
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| {
            let authored: Vec<&Message> =
                messages.iter().filter(|m| m.author == entry.user).collect();
            UserWordsEntry {
                user: entry.user,
                name: entry.name.clone(),
                words: word_rank::top_words(authored, USER_TOP_WORDS),
            }
        })
        .collect();

    let busiest_hour = busiest_hour::busiest_hour(messages)?;

    tracing::debug!(
        users = users.len(),
        messages = messages.len(),
        "statistics report computed"
    );

    Ok(StatisticsReport {
        generated_at: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        total_messages: messages.len() as u64,
        message_counts,
        top_words,
        user_top_words,
        busiest_hour,
    })
}

impl StatisticsReport {
    #[cfg(test)]
    /// Validate report JSON against the JSON schema
    pub fn validate_with_schema(report_json: &serde_json::Value, schema: &JSONSchema) -> Result<()> {
        match schema.validate(report_json) {
            Ok(_) => Ok(()),
            Err(errors) => {
                let error_messages: Vec<String> = errors
                    .map(|e| format!("  - {}: {}", e.instance_path, e))
                    .collect();
                bail!("Report validation failed:\n{}", error_messages.join("\n"))
            }
        }
    }

    #[cfg(test)]
    /// Load and compile the JSON schema
    pub fn load_schema(schema_path: &std::path::Path) -> Result<JSONSchema> {
        use anyhow::Context;

        let schema_content = std::fs::read_to_string(schema_path)
            .with_context(|| format!("Failed to read schema file: {}", schema_path.display()))?;

        let schema_json: serde_json::Value =
            serde_json::from_str(&schema_content).with_context(|| {
                format!(
                    "Failed to parse schema JSON from: {}",
                    schema_path.display()
                )
            })?;

        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_json)
            .map_err(|e| anyhow!("Failed to compile JSON schema: {}", e))
    }
}
