//! Five-letter word representation
//!
//! A Word stores an uppercase 5-letter word along with the set of letters it
//! contains, used by the feedback classifier.

use super::NUM_LETTERS;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// An uppercase 5-letter word with letter membership tracking
///
/// Used both for the secret and for the player's guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; NUM_LETTERS],
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {NUM_LETTERS} letters, got {0}")]
    InvalidLength(usize),
    #[error("Invalid letter: '{0}'")]
    InvalidLetter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is uppercased first. Length is counted in characters, so a
    /// non-ASCII input reports its visible length rather than its byte length.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Any character is not an ASCII letter (the first offender is reported)
    ///
    /// # Examples
    /// ```
    /// use wyrdl::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();

        let len = text.chars().count();
        if len != NUM_LETTERS {
            return Err(WordError::InvalidLength(len));
        }

        if let Some(invalid) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidLetter(invalid));
        }

        // All ASCII from here, so five chars are five bytes
        let mut chars = [0u8; NUM_LETTERS];
        chars.copy_from_slice(text.as_bytes());

        let letters: FxHashSet<u8> = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; NUM_LETTERS] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // "é" is two bytes but one letter
        assert_eq!(Word::new("caféé"), Err(WordError::InvalidLetter('É')));
        assert_eq!(Word::new("café"), Err(WordError::InvalidLength(4)));
    }

    #[test]
    fn word_creation_reports_first_invalid_letter() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidLetter('3')));
        assert_eq!(Word::new("c an "), Err(WordError::InvalidLetter(' ')));
        assert_eq!(Word::new("it'll"), Err(WordError::InvalidLetter('\'')));
        assert_eq!(Word::new("a!b?c"), Err(WordError::InvalidLetter('!')));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("snake").unwrap();
        assert!(word.has_letter(b'S'));
        assert!(word.has_letter(b'K'));
        assert!(!word.has_letter(b'C'));
        assert!(!word.has_letter(b's')); // Stored uppercase
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "snake".parse().unwrap();
        assert_eq!(format!("{word}"), "SNAKE");
        assert!("snak".parse::<Word>().is_err());
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
