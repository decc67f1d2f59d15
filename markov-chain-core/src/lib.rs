//! Word-level Markov chain text generation library.
//!
//! This crate provides a small n-gram text generator including:
//! - Whitespace tokenization of a corpus
//! - Bigram and trigram chain tables (state -> observed successors)
//! - Random walks over a chain table with an injectable randomness source
//! - Internal utilities for I/O and path handling
//!
//! The chain table is immutable once built and can be shared freely
//! between concurrent generations.

/// Error type shared by every operation of the crate.
pub mod error;

/// Chain tables, states and text generation.
///
/// This module exposes the high-level generator interface together with
/// the table and state types it walks.
pub mod model;

/// Whitespace tokenizer.
pub mod tokenizer;

/// I/O utilities (corpus loading, path helpers).
pub mod io;

pub use error::ChainError;
pub use model::chain_table::{ChainTable, Order};
pub use model::generation_input::{GenerationInput, StartSeed};
pub use model::generator::{Generator, generate};
pub use model::picker::Picker;
pub use model::state::State;
