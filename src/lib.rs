//! Wyrdl
//!
//! A terminal word-guessing game: find the secret five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wyrdl::core::{LetterSummary, Word};
//! use wyrdl::game::{Game, GameStatus};
//!
//! let mut game = Game::new(Word::new("snake").unwrap());
//! game.submit("crane").unwrap();
//!
//! let summary = LetterSummary::new(&game.history()[0], game.secret());
//! println!("Misplaced: {:?}", summary.misplaced);
//!
//! assert_eq!(game.submit("snake"), Ok(GameStatus::Won));
//! ```

// Core domain types
pub mod core;

// Guess validation and game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
