use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a chain table or generating text.
///
/// Every variant is terminal for a single generation run: callers report
/// it and stop, nothing is retried.
#[derive(Error, Debug)]
pub enum ChainError {
	/// The corpus holds fewer than `order + 1` tokens.
	#[error("insufficient input for a {order}-gram chain: need at least {required} tokens, got {actual}")]
	InsufficientInput { order: usize, required: usize, actual: usize },

	/// No state of the table can be used to start a walk.
	#[error("no valid starting state in the chain table")]
	NoValidStart,

	/// A custom start seed does not hold exactly `order` tokens.
	#[error("start seed must contain exactly {expected} words, got {actual}")]
	InvalidSeed { expected: usize, actual: usize },

	/// Only bigram (2) and trigram (3) chains are supported.
	#[error("unsupported n-gram order {0}, expected 2 or 3")]
	InvalidOrder(usize),

	/// A word cap of zero would never emit anything.
	#[error("max words must be strictly positive")]
	InvalidMaxWords,

	/// The corpus file could not be opened or read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
