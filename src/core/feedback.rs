//! Per-letter feedback for a guess
//!
//! Classification is by letter identity, not by letter count:
//! - Correct: the letter sits at the same position in the secret
//! - Misplaced: the letter occurs somewhere in the secret
//! - Wrong: the letter does not occur in the secret at all
//!
//! A guess that repeats a letter occurring once in the secret gets every
//! non-matching copy marked Misplaced. The game has always scored this way
//! and players' expectations follow it, so duplicate counting is not applied.

use super::{NUM_LETTERS, Word};
use std::collections::BTreeSet;

/// Feedback tag for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Right letter, right position
    Correct,
    /// Letter is in the secret, but not here
    Misplaced,
    /// Letter is not in the secret
    Wrong,
}

impl LetterClass {
    /// Emoji tile for this class
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// Classify each position of `guess` against `secret`
///
/// # Examples
/// ```
/// use wyrdl::core::{LetterClass, Word, classify};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("snake").unwrap();
///
/// assert_eq!(
///     classify(&guess, &secret),
///     [
///         LetterClass::Wrong,
///         LetterClass::Wrong,
///         LetterClass::Correct,
///         LetterClass::Misplaced,
///         LetterClass::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn classify(guess: &Word, secret: &Word) -> [LetterClass; NUM_LETTERS] {
    let mut result = [LetterClass::Wrong; NUM_LETTERS];

    for (i, (&letter, &target)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        result[i] = if letter == target {
            LetterClass::Correct
        } else if secret.has_letter(letter) {
            LetterClass::Misplaced
        } else {
            LetterClass::Wrong
        };
    }

    result
}

/// Letter sets of a single guess, sorted alphabetically
///
/// Unlike the per-position tags, a letter that is correct anywhere in the
/// guess is never also listed as misplaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSummary {
    pub correct: BTreeSet<char>,
    pub misplaced: BTreeSet<char>,
    pub wrong: BTreeSet<char>,
}

impl LetterSummary {
    /// Summarize `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wyrdl::core::{LetterSummary, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("snake").unwrap();
    /// let summary = LetterSummary::new(&guess, &secret);
    ///
    /// assert_eq!(summary.correct.iter().collect::<String>(), "AE");
    /// assert_eq!(summary.misplaced.iter().collect::<String>(), "N");
    /// assert_eq!(summary.wrong.iter().collect::<String>(), "CR");
    /// ```
    #[must_use]
    pub fn new(guess: &Word, secret: &Word) -> Self {
        let correct: BTreeSet<char> = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .filter(|(letter, target)| letter == target)
            .map(|(&letter, _)| char::from(letter))
            .collect();

        let mut misplaced = BTreeSet::new();
        let mut wrong = BTreeSet::new();
        for &letter in guess.chars() {
            let ch = char::from(letter);
            if !secret.has_letter(letter) {
                wrong.insert(ch);
            } else if !correct.contains(&ch) {
                misplaced.insert(ch);
            }
        }

        Self {
            correct,
            misplaced,
            wrong,
        }
    }
}
