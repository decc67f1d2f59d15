use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::state::State;
use crate::error::ChainError;
use crate::tokenizer;

/// Number of words in a chain state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
	#[default]
	Bigram,
	Trigram,
}

impl Order {
	/// Number of words per state (2 or 3).
	pub fn size(self) -> usize {
		match self {
			Order::Bigram => 2,
			Order::Trigram => 3,
		}
	}
}

impl TryFrom<usize> for Order {
	type Error = ChainError;

	fn try_from(n: usize) -> Result<Self, Self::Error> {
		match n {
			2 => Ok(Order::Bigram),
			3 => Ok(Order::Trigram),
			_ => Err(ChainError::InvalidOrder(n)),
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Order::Bigram => write!(f, "bigram"),
			Order::Trigram => write!(f, "trigram"),
		}
	}
}

/// Word chain built from a corpus.
///
/// Maps every state (N consecutive words) to the ordered list of words
/// observed right after it. Duplicates are kept: a successor seen twice is
/// twice as likely to be picked by a walk.
///
/// # Invariants
/// - Every key holds exactly `order.size()` words
/// - Every successor list is non-empty and in corpus order
/// - `insertion_order` lists every key once, in order of first appearance
/// - The table is never mutated after `build` returns
#[derive(Clone, Debug, PartialEq)]
pub struct ChainTable {
	order: Order,
	states: HashMap<State, Vec<String>>,
	insertion_order: Vec<State>,
}

impl ChainTable {
	/// Tokenizes `text` on whitespace and builds the table.
	///
	/// # Errors
	/// See [`ChainTable::build`].
	pub fn from_text(text: &str, order: Order) -> Result<Self, ChainError> {
		Self::build(&tokenizer::tokens(text), order)
	}

	/// Builds the chain table of a token sequence.
	///
	/// Every window of N tokens is recorded with the token that follows it.
	/// Then the last full window gets the final token appended once more.
	///
	/// # Notes
	/// The second append of the final token was most likely never intended
	/// (the last window already saw it), but generated text has always been
	/// sampled from this exact distribution, so it is kept. Changing it must
	/// be a deliberate change to `final_window_gets_final_token_twice`.
	///
	/// # Errors
	/// Returns `ChainError::InsufficientInput` if there are fewer than
	/// `N + 1` tokens.
	pub fn build<S: AsRef<str>>(tokens: &[S], order: Order) -> Result<Self, ChainError> {
		let n = order.size();
		if tokens.len() < n + 1 {
			return Err(ChainError::InsufficientInput { order: n, required: n + 1, actual: tokens.len() });
		}

		let mut table = Self { order, states: HashMap::new(), insertion_order: Vec::new() };

		for window in tokens.windows(n + 1) {
			table.add_transition(State::from_words(&window[..n]), window[n].as_ref());
		}

		let last = tokens.len() - 1;
		table.add_transition(State::from_words(&tokens[last - n..last]), tokens[last].as_ref());

		debug!(
			"built {} chain: {} tokens, {} states, {} transitions",
			order,
			tokens.len(),
			table.len(),
			table.transition_count()
		);
		Ok(table)
	}

	fn add_transition(&mut self, state: State, next: &str) {
		match self.states.get_mut(&state) {
			Some(successors) => successors.push(next.to_owned()),
			None => {
				self.insertion_order.push(state.clone());
				self.states.insert(state, vec![next.to_owned()]);
			}
		}
	}

	pub fn order(&self) -> Order {
		self.order
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.insertion_order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.insertion_order.is_empty()
	}

	/// Total number of recorded successors, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(Vec::len).sum()
	}

	/// Successors observed after `state`, in corpus order.
	///
	/// Returns `None` if the state was never seen, which ends a walk.
	pub fn successors(&self, state: &State) -> Option<&[String]> {
		self.states.get(state).map(Vec::as_slice)
	}

	pub fn contains(&self, state: &State) -> bool {
		self.states.contains_key(state)
	}

	/// States in order of first appearance in the corpus.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.insertion_order.iter()
	}

	/// `(state, successors)` pairs in order of first appearance.
	pub fn iter(&self) -> impl Iterator<Item = (&State, &[String])> {
		self.insertion_order
			.iter()
			.filter_map(|state| self.successors(state).map(|successors| (state, successors)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(words: &[&str]) -> State {
		State::from_words(words)
	}

	#[test]
	fn order_conversion() {
		assert_eq!(Order::try_from(2).unwrap(), Order::Bigram);
		assert_eq!(Order::try_from(3).unwrap().size(), 3);
		assert!(matches!(Order::try_from(1), Err(ChainError::InvalidOrder(1))));
		assert!(matches!(Order::try_from(4), Err(ChainError::InvalidOrder(4))));
		assert_eq!(Order::default(), Order::Bigram);
		assert_eq!(Order::Trigram.to_string(), "trigram");
	}

	#[test]
	fn bigram_keys_and_successors() {
		let table = ChainTable::from_text("hi there mary hi there juanita", Order::Bigram).unwrap();

		let keys: Vec<&State> = table.states().collect();
		assert_eq!(keys, vec![&key(&["hi", "there"]), &key(&["there", "mary"]), &key(&["mary", "hi"])]);

		// "juanita" is listed twice because of the final-window append.
		assert_eq!(table.successors(&key(&["hi", "there"])).unwrap(), ["mary", "juanita", "juanita"]);
		assert_eq!(table.successors(&key(&["there", "mary"])).unwrap(), ["hi"]);
		assert_eq!(table.successors(&key(&["mary", "hi"])).unwrap(), ["there"]);
		assert_eq!(table.successors(&key(&["there", "juanita"])), None);
	}

	#[test]
	fn trigram_keys() {
		let table = ChainTable::from_text("one fish two fish one fish two cats", Order::Trigram).unwrap();

		assert_eq!(table.order(), Order::Trigram);
		assert!(table.states().all(|state| state.len() == 3));
		assert_eq!(table.successors(&key(&["one", "fish", "two"])).unwrap(), ["fish", "cats", "cats"]);
		assert_eq!(table.successors(&key(&["fish", "two", "fish"])).unwrap(), ["one"]);
	}

	#[test]
	fn final_window_gets_final_token_twice() {
		// Exactly N + 1 tokens: one window, whose successor is appended
		// by the loop and then again as the closing entry.
		let table = ChainTable::from_text("green eggs ham", Order::Bigram).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.successors(&key(&["green", "eggs"])).unwrap(), ["ham", "ham"]);

		let table = ChainTable::from_text("I am Sam Sam-I-am", Order::Trigram).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.successors(&key(&["I", "am", "Sam"])).unwrap(), ["Sam-I-am", "Sam-I-am"]);
	}

	#[test]
	fn insufficient_input_is_an_error() {
		match ChainTable::from_text("green eggs", Order::Bigram) {
			Err(ChainError::InsufficientInput { order, required, actual }) => {
				assert_eq!((order, required, actual), (2, 3, 2));
			}
			other => panic!("expected insufficient input, got {:?}", other),
		}
		assert!(matches!(
			ChainTable::from_text("green eggs ham", Order::Trigram),
			Err(ChainError::InsufficientInput { required: 4, actual: 3, .. })
		));
		assert!(ChainTable::from_text("", Order::Bigram).is_err());
	}

	#[test]
	fn counts_and_iteration() {
		let table = ChainTable::from_text("The quick brown fox. The quick red fox.", Order::Bigram).unwrap();

		assert_eq!(table.len(), 5);
		assert!(!table.is_empty());
		// 6 windows + the closing append
		assert_eq!(table.transition_count(), 7);
		assert!(table.contains(&key(&["The", "quick"])));
		assert!(!table.contains(&key(&["red", "fox."])));

		let pairs: Vec<(String, usize)> = table.iter().map(|(s, next)| (s.to_string(), next.len())).collect();
		assert_eq!(
			pairs,
			vec![
				("The quick".to_owned(), 2),
				("quick brown".to_owned(), 1),
				("brown fox.".to_owned(), 1),
				("fox. The".to_owned(), 1),
				("quick red".to_owned(), 2),
			]
		);
	}

	#[test]
	fn build_accepts_owned_tokens() {
		let tokens: Vec<String> = "a b c d".split(' ').map(str::to_owned).collect();
		let table = ChainTable::build(&tokens, Order::Bigram).unwrap();
		assert_eq!(table, ChainTable::from_text("a b c d", Order::Bigram).unwrap());
	}
}
