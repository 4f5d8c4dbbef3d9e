//! Core domain types for the game
//!
//! Words and letter feedback. Everything here is pure and deterministic; the
//! only randomness in the crate lives in the word source.

mod feedback;
mod word;

pub use feedback::{LetterClass, LetterSummary, classify};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const NUM_LETTERS: usize = 5;

/// Number of guesses the player gets
pub const MAX_GUESSES: usize = 6;
