use crate::model::{MessageId, UserId};
use thiserror::Error;

/// Errors produced by the statistics and feed core.
///
/// Everything here is a contract violation of the supplied dataset or a
/// computation with no defined answer; IO and parse failures stay at the
/// snapshot-loading boundary as `anyhow` errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The busiest hour is undefined over zero messages.
    #[error("no messages to aggregate")]
    EmptyInput,

    #[error("unknown user id {0}")]
    UnknownUser(UserId),

    /// A follow edge pointing back at its own follower.
    #[error("user {0} follows itself")]
    SelfFollow(UserId),

    #[error("message {0} has empty content")]
    EmptyMessage(MessageId),

    #[error("invalid email or password")]
    InvalidCredentials,
}
