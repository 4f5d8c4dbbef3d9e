//! Game state machine
//!
//! `Playing { round }` → `Won` when a guess equals the secret, `Lost` after
//! the sixth miss. Both end states are final.

use super::validator::{GuessError, validate_guess};
use crate::core::{LetterClass, MAX_GUESSES, NUM_LETTERS, Word, classify};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the guess of `round` (0-based)
    Playing { round: usize },
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing { .. })
    }
}

/// One game session: the secret and the guesses made so far
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    history: Vec<Word>,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        log::debug!("New game, {MAX_GUESSES} guesses allowed");
        Self {
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::Playing { round: 0 },
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Guesses recorded so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    /// Validate `input` and, if it is acceptable, play it as this round's guess
    ///
    /// A rejected guess leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or `GuessError::GameOver` once the game
    /// has been won or lost.
    ///
    /// # Examples
    /// ```
    /// use wyrdl::core::Word;
    /// use wyrdl::game::{Game, GameStatus};
    ///
    /// let mut game = Game::new(Word::new("snake").unwrap());
    /// assert_eq!(game.submit("crane"), Ok(GameStatus::Playing { round: 1 }));
    /// assert_eq!(game.submit("snake"), Ok(GameStatus::Won));
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<GameStatus, GuessError> {
        let GameStatus::Playing { round } = self.status else {
            return Err(GuessError::GameOver);
        };

        let guess = validate_guess(input, &self.history)?;
        log::debug!("Round {}: {guess}", round + 1);

        let solved = guess == self.secret;
        self.history.push(guess);

        self.status = if solved {
            GameStatus::Won
        } else if round + 1 >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing { round: round + 1 }
        };
        log::debug!("Status: {:?}", self.status);

        Ok(self.status)
    }

    /// The board as six rows, recorded guesses first, then unfilled slots
    pub fn rows(&self) -> impl Iterator<Item = Option<(&Word, [LetterClass; NUM_LETTERS])>> {
        self.history
            .iter()
            .map(|guess| Some((guess, classify(guess, &self.secret))))
            .chain(std::iter::repeat_n(None, self.guesses_left()))
    }
}
