//! Word lists and secret selection
//!
//! Provides the embedded default list, file loading, and the random pick of
//! the secret word.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordList, load_from_file};
pub use source::{WordListError, filter_candidates, select_secret};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_playable() {
        // Every embedded entry must survive filtering, otherwise it could never be the secret
        assert_eq!(filter_candidates(WORDS).len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
