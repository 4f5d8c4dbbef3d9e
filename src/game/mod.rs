//! Guess validation and the round-by-round game state

mod state;
mod validator;

pub use state::{Game, GameStatus};
pub use validator::{GuessError, validate_guess};
