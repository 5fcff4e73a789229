/// Feed assembly over the follow graph.
use std::collections::HashSet;

use crate::model::{Message, User, UserId};

/// Assembles a user's feed: every message authored by someone in their
/// following set, oldest first.
///
/// The requesting user's own messages never appear because the followed set
/// never contains them (self-follow edges are rejected at the snapshot
/// boundary). The sort is stable, so messages sharing a timestamp keep the
/// snapshot's order. Following nobody yields an empty feed.
pub fn assemble_feed(followed: &[&User], messages: &[Message]) -> Vec<Message> {
    let followed_ids: HashSet<UserId> = followed.iter().map(|user| user.id).collect();

    let mut feed: Vec<Message> = messages
        .iter()
        .filter(|message| followed_ids.contains(&message.author))
        .cloned()
        .collect();
    feed.sort_by_key(|message| message.created_at);
    feed
}
