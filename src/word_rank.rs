/// Word-frequency ranking over message content.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Message;
use crate::tokenize;

/// One word paired with its occurrence count. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Ranks words across `messages`, most frequent first, truncated to `k`.
///
/// Counts accumulate in an `IndexMap`, so each word's position is fixed by
/// its first occurrence (messages in the given order, tokens left to right).
/// The final sort is stable and compares counts only; words with equal
/// counts therefore keep first-occurrence order. Fewer than `k` distinct
/// words returns them all.
pub fn top_words<'a, I>(messages: I, k: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for message in messages {
        for token in tokenize::tokens(&message.content) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}
