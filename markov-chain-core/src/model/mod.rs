//! Top-level module for the chain-based generation system.
//!
//! It contains:
//! - Fixed-length word states (`State`)
//! - Bigram/trigram chain tables (`ChainTable`)
//! - The randomness capability used by walks (`Picker`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// High-level interface walking a chain table to synthesize text.
pub mod generator;

/// Mapping from a fixed-length word state to its observed successors.
///
/// Handles table construction from a token sequence and read-only lookups.
pub mod chain_table;

/// Value-type key of a chain table: an ordered tuple of N words.
pub mod state;

/// Uniform choice among a non-empty ordered sequence.
///
/// Blanket-implemented for every `rand::Rng` so seeded generators can be
/// injected in tests.
pub mod picker;

/// Generation configuration structure.
///
/// Stores the start strategy and the optional word cap of a walk.
pub mod generation_input;
