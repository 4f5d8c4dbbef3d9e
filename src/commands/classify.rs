//! Classify command
//!
//! Shows the feedback a guess would get against a chosen secret.

use crate::core::{LetterClass, LetterSummary, NUM_LETTERS, Word, classify};

/// Result of classifying one guess
pub struct ClassifyResult {
    pub guess: Word,
    pub secret: Word,
    pub classes: [LetterClass; NUM_LETTERS],
    pub summary: LetterSummary,
}

/// Classify `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn classify_words(guess: &str, secret: &str) -> Result<ClassifyResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    Ok(ClassifyResult {
        classes: classify(&guess, &secret),
        summary: LetterSummary::new(&guess, &secret),
        guess,
        secret,
    })
}
