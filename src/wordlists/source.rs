//! Secret word selection

use crate::core::{NUM_LETTERS, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Error type for word lists that can't produce a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("No words of length {NUM_LETTERS} in word list")]
    Empty,
}

/// Keep the candidates that are playable words, uppercased
///
/// A candidate is playable when it has exactly five characters, all ASCII
/// letters. The check runs on the raw entry, before uppercasing, since some
/// non-ASCII letters uppercase to ASCII ones (`ſ` to `S`). Order is preserved.
#[must_use]
pub fn filter_candidates<S: AsRef<str>>(candidates: &[S]) -> Vec<Word> {
    candidates
        .iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|candidate| is_playable(candidate))
        .filter_map(|candidate| Word::new(candidate).ok())
        .collect()
}

fn is_playable(candidate: &str) -> bool {
    candidate.chars().count() == NUM_LETTERS
        && candidate.chars().all(|c| c.is_ascii_alphabetic())
}

/// Pick the secret uniformly at random from the playable candidates
///
/// # Errors
///
/// Returns `WordListError::Empty` if no candidate survives filtering.
///
/// # Examples
/// ```
/// use wyrdl::wordlists::select_secret;
///
/// let secret = select_secret(&["snake", "worm", "it'll"], &mut rand::rng()).unwrap();
/// assert_eq!(secret.text(), "SNAKE");
/// ```
pub fn select_secret<S, R>(candidates: &[S], rng: &mut R) -> Result<Word, WordListError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let words = filter_candidates(candidates);
    log::info!(
        "{} of {} candidates are playable",
        words.len(),
        candidates.len()
    );

    let secret = words.choose(rng).cloned().ok_or(WordListError::Empty)?;
    log::trace!("Secret word: {secret}");
    Ok(secret)
}
