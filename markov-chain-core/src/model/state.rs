use std::fmt;

/// Represents a state of a word chain.
///
/// A `State` is the ordered tuple of the N most recent words of a walk
/// (N = 2 for bigram chains, N = 3 for trigram chains). It is the key of a
/// [`ChainTable`](super::chain_table::ChainTable).
///
/// Equality and hashing are by content: two states taken from different
/// positions of a corpus are the same key when all their words match.
///
/// ## Invariants
/// - The number of words never changes after construction
/// - `advance` preserves the length
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
	words: Vec<String>,
}

impl State {
	/// Creates a state from a window of consecutive words.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		Self { words: words.iter().map(|w| w.as_ref().to_owned()).collect() }
	}

	/// Words of the state, oldest first.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Oldest word of the state.
	pub fn first(&self) -> Option<&str> {
		self.words.first().map(String::as_str)
	}

	/// Returns `true` if the first character of the first word is uppercase.
	///
	/// Used to start walks at something that looks like a sentence start.
	pub fn starts_capitalized(&self) -> bool {
		self.first()
			.and_then(|word| word.chars().next())
			.is_some_and(char::is_uppercase)
	}

	/// Returns the next state of a walk: the oldest word is dropped and
	/// `next` is appended.
	pub fn advance(&self, next: &str) -> Self {
		let mut words = Vec::with_capacity(self.words.len());
		words.extend(self.words.iter().skip(1).cloned());
		words.push(next.to_owned());
		Self { words }
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words.join(" "))
	}
}
