/// Splits a text into whitespace-delimited tokens.
///
/// - Runs of whitespace (any Unicode whitespace) act as a single separator
/// - Empty tokens are never produced
/// - Punctuation and capitalization are kept verbatim
///
/// The returned iterator borrows from `text` and is lazy.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
	text.split_whitespace()
}

/// Materialized form of [`tokenize`].
pub fn tokens(text: &str) -> Vec<&str> {
	tokenize(text).collect()
}
