//! Player input validation

use crate::core::{NUM_LETTERS, Word, WordError};
use thiserror::Error;

/// Why a guess was not accepted
///
/// Every variant except `GameOver` is recoverable: the player is asked again
/// for the same round and nothing is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("You've already guessed {0}.")]
    AlreadyGuessed(String),
    #[error("Your guess must be {expected} letters")]
    WrongLength { expected: usize, actual: usize },
    #[error("Invalid letter: '{0}'. Please use English letters")]
    InvalidLetter(char),
    #[error("The game is already over")]
    GameOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(actual) => Self::WrongLength {
                expected: NUM_LETTERS,
                actual,
            },
            WordError::InvalidLetter(letter) => Self::InvalidLetter(letter),
        }
    }
}

/// Validate a raw guess against the earlier guesses of this game
///
/// Checks, in order: not guessed before, exactly five characters, only ASCII
/// letters. The comparison with earlier guesses is done on the uppercased
/// input, so `crane` repeats `CRANE`.
///
/// # Errors
///
/// Returns the first rule the input breaks.
///
/// # Examples
/// ```
/// use wyrdl::core::Word;
/// use wyrdl::game::{GuessError, validate_guess};
///
/// let previous = [Word::new("crane").unwrap()];
///
/// assert_eq!(validate_guess("snake", &previous).unwrap().text(), "SNAKE");
/// assert_eq!(
///     validate_guess("crane", &previous),
///     Err(GuessError::AlreadyGuessed("CRANE".to_string()))
/// );
/// ```
pub fn validate_guess(input: &str, previous_guesses: &[Word]) -> Result<Word, GuessError> {
    let guess = input.to_uppercase();

    if previous_guesses.iter().any(|word| word.text() == guess) {
        return Err(GuessError::AlreadyGuessed(guess));
    }

    Ok(Word::new(guess)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn accepts_fresh_word_and_uppercases() {
        let guess = validate_guess("crane", &[]).unwrap();
        assert_eq!(guess.text(), "CRANE");

        let guess = validate_guess("SnAkE", &words(&["crane"])).unwrap();
        assert_eq!(guess.text(), "SNAKE");
    }

    #[test]
    fn rejects_repeat_in_any_case() {
        let previous = words(&["crane", "slate"]);
        assert_eq!(
            validate_guess("Slate", &previous),
            Err(GuessError::AlreadyGuessed("SLATE".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            validate_guess("worm", &[]),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            validate_guess("", &[]),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 0
            })
        );
        assert_eq!(
            validate_guess("snakes", &[]),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn rejects_non_letters_naming_first_offender() {
        assert_eq!(
            validate_guess("it'll", &[]),
            Err(GuessError::InvalidLetter('\''))
        );
        assert_eq!(
            validate_guess("ab1d2", &[]),
            Err(GuessError::InvalidLetter('1'))
        );
    }

    #[test]
    fn length_is_checked_before_letters() {
        assert!(matches!(
            validate_guess("12", &[]),
            Err(GuessError::WrongLength { actual: 2, .. })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GuessError::AlreadyGuessed("CRANE".to_string()).to_string(),
            "You've already guessed CRANE."
        );
        assert_eq!(
            GuessError::WrongLength {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "Your guess must be 5 letters"
        );
        assert_eq!(
            GuessError::InvalidLetter('3').to_string(),
            "Invalid letter: '3'. Please use English letters"
        );
    }
}
