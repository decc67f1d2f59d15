use crate::error::ChainError;

/// Strategy used to select the starting state of a walk.
///
/// # Variants
/// - `Any`: any state of the table.
/// - `Capitalized`: only states whose first word starts with an uppercase
///   letter, so the text reads like it starts a sentence.
/// - `Custom(String)`: the given words (whitespace separated) are the start
///   state. They must form a state of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartSeed {
	#[default]
	Any,
	Capitalized,
	Custom(String),
}

/// Input parameters of a single generation run.
///
/// # Invariants
/// - `max_words`, when set, is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationInput {
	/// Where the walk starts.
	pub start: StartSeed,

	/// Optional cap on the number of generated words.
	max_words: Option<usize>,
}

impl GenerationInput {
	/// Unbounded walk starting anywhere.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style helper setting the start strategy.
	pub fn with_start(mut self, start: StartSeed) -> Self {
		self.start = start;
		self
	}

	/// Builder-style helper setting the word cap.
	///
	/// # Errors
	/// See [`GenerationInput::set_max_words`].
	pub fn with_max_words(mut self, max_words: Option<usize>) -> Result<Self, ChainError> {
		self.set_max_words(max_words)?;
		Ok(self)
	}

	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the maximum number of words of a generated text.
	///
	/// `None` lets the walk run until it reaches a state without successors,
	/// which on a cyclic chain may take arbitrarily long. The start state is
	/// always emitted in full, even if it is longer than the cap.
	///
	/// # Errors
	/// Returns `ChainError::InvalidMaxWords` for `Some(0)`.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<(), ChainError> {
		if max_words == Some(0) {
			return Err(ChainError::InvalidMaxWords);
		}
		self.max_words = max_words;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_unbounded_and_start_anywhere() {
		let input = GenerationInput::new();
		assert_eq!(input.start, StartSeed::Any);
		assert_eq!(input.max_words(), None);
	}

	#[test]
	fn zero_cap_is_rejected() {
		let mut input = GenerationInput::new();
		assert!(matches!(input.set_max_words(Some(0)), Err(ChainError::InvalidMaxWords)));
		assert_eq!(input.max_words(), None);

		input.set_max_words(Some(12)).unwrap();
		assert_eq!(input.max_words(), Some(12));
		input.set_max_words(None).unwrap();
		assert_eq!(input.max_words(), None);
	}

	#[test]
	fn builder_helpers() {
		let input = GenerationInput::new()
			.with_start(StartSeed::Custom("green eggs".to_owned()))
			.with_max_words(Some(5))
			.unwrap();
		assert_eq!(input.start, StartSeed::Custom("green eggs".to_owned()));
		assert_eq!(input.max_words(), Some(5));
		assert!(GenerationInput::new().with_max_words(Some(0)).is_err());
	}
}
