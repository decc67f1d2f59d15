use std::path::Path;
use std::sync::Arc;

use log::{debug, trace};

use super::chain_table::{ChainTable, Order};
use super::generation_input::{GenerationInput, StartSeed};
use super::picker::Picker;
use super::state::State;
use crate::error::ChainError;
use crate::{io, tokenizer};

/// High-level generator over a single chain table.
///
/// # Responsibilities
/// - Build (or receive) the chain table of a corpus once
/// - Share it read-only: clones of a `Generator` point to the same table
/// - Run independent walks, each with its own local state
#[derive(Clone, Debug)]
pub struct Generator {
	table: Arc<ChainTable>,
}

impl Generator {
	pub fn new(table: ChainTable) -> Self {
		Self { table: Arc::new(table) }
	}

	/// Builds a generator from an in-memory corpus.
	///
	/// # Errors
	/// Returns `ChainError::InsufficientInput` if the corpus is too short
	/// for `order`.
	pub fn from_text(text: &str, order: Order) -> Result<Self, ChainError> {
		Ok(Self::new(ChainTable::from_text(text, order)?))
	}

	/// Reads a corpus file and builds its chain table.
	///
	/// # Errors
	/// - `ChainError::Io` if the file cannot be read.
	/// - `ChainError::InsufficientInput` if the corpus is too short.
	pub fn from_file<P: AsRef<Path>>(filepath: P, order: Order) -> Result<Self, ChainError> {
		let text = io::read_text(&filepath)?;
		debug!("loaded corpus {} ({} bytes)", filepath.as_ref().display(), text.len());
		Self::from_text(&text, order)
	}

	/// Read-only access to the shared chain table.
	pub fn table(&self) -> &ChainTable {
		&self.table
	}

	/// Generates a text using the thread-local random generator.
	pub fn generate(&self, input: &GenerationInput) -> Result<String, ChainError> {
		generate(&self.table, input, &mut rand::rng())
	}

	/// Generates a text with an explicit randomness source.
	pub fn generate_with<P: Picker>(&self, input: &GenerationInput, picker: &mut P) -> Result<String, ChainError> {
		generate(&self.table, input, picker)
	}
}

/// Walks `table` from a random start and returns the generated words
/// joined by single spaces.
///
/// # Behavior
/// - The start state is chosen uniformly among the candidates allowed by
///   `input.start`, in first-appearance order.
/// - The output starts with the N words of the start state.
/// - At each step one successor of the current state is chosen uniformly
///   (duplicates count), appended, and the state slides by one word.
/// - The walk stops when the current state has no entry in the table, or
///   when `input.max_words()` words have been produced.
///
/// # Errors
/// - `ChainError::NoValidStart` if no state matches the start strategy.
/// - `ChainError::InvalidSeed` if a custom seed has the wrong word count.
pub fn generate<P: Picker>(table: &ChainTable, input: &GenerationInput, picker: &mut P) -> Result<String, ChainError> {
	let mut state = start_state(table, &input.start, picker)?;
	let mut words: Vec<String> = state.words().to_vec();

	let mut capped = false;
	loop {
		if input.max_words().is_some_and(|max| words.len() >= max) {
			capped = true;
			break;
		}

		let Some(next) = table.successors(&state).and_then(|successors| picker.pick(successors)) else {
			break;
		};
		state = state.advance(next);
		words.push(next.to_owned());
	}

	trace!("walk produced {} words (capped: {})", words.len(), capped);
	Ok(words.join(" "))
}

/// Selects the first state of a walk.
fn start_state<P: Picker>(table: &ChainTable, start: &StartSeed, picker: &mut P) -> Result<State, ChainError> {
	match start {
		StartSeed::Any => {
			let candidates: Vec<&State> = table.states().collect();
			picker.pick(&candidates).map(|state| (*state).clone()).ok_or(ChainError::NoValidStart)
		}
		StartSeed::Capitalized => {
			let candidates: Vec<&State> = table.states().filter(|state| state.starts_capitalized()).collect();
			picker.pick(&candidates).map(|state| (*state).clone()).ok_or(ChainError::NoValidStart)
		}
		StartSeed::Custom(seed) => {
			let words = tokenizer::tokens(seed);
			let expected = table.order().size();
			if words.len() != expected {
				return Err(ChainError::InvalidSeed { expected, actual: words.len() });
			}
			let state = State::from_words(&words);
			if table.contains(&state) { Ok(state) } else { Err(ChainError::NoValidStart) }
		}
	}
}
