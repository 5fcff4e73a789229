/// Splits message content into normalized word tokens.
///
/// Tokens are whitespace-delimited and lowercased; punctuation stays part of
/// the word. Empty or whitespace-only content yields no tokens.
pub fn tokens(content: &str) -> impl Iterator<Item = String> + '_ {
    content.split_whitespace().map(|word| word.to_lowercase())
}
