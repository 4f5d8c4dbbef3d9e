//! Formatting utilities for terminal output

use crate::core::{LetterClass, NUM_LETTERS, Word};
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Width of the line-based console
pub const CONSOLE_WIDTH: usize = 40;

/// Placeholder letter for an unfilled board slot
pub const UNFILLED: char = '_';

/// Style a single board tile
///
/// `None` is an unfilled slot.
#[must_use]
pub fn styled_tile(letter: char, class: Option<LetterClass>) -> ColoredString {
    let text = letter.to_string();
    match class {
        Some(LetterClass::Correct) => text.bold().white().on_green(),
        Some(LetterClass::Misplaced) => text.bold().white().on_yellow(),
        Some(LetterClass::Wrong) => text.white().on_truecolor(0x66, 0x66, 0x66),
        None => text.dimmed(),
    }
}

/// Style one board row; `None` renders the unfilled placeholder
#[must_use]
pub fn styled_row(row: Option<(&Word, [LetterClass; NUM_LETTERS])>) -> String {
    match row {
        Some((word, classes)) => word
            .chars()
            .iter()
            .zip(classes)
            .map(|(&letter, class)| styled_tile(char::from(letter), Some(class)).to_string())
            .collect(),
        None => (0..NUM_LETTERS)
            .map(|_| styled_tile(UNFILLED, None).to_string())
            .collect(),
    }
}

/// Left-pad `text` so it sits centered in `width` columns
///
/// `visible_width` is the printed width of `text`, which differs from its
/// length once color escapes are added.
#[must_use]
pub fn center(text: &str, visible_width: usize, width: usize) -> String {
    let pad = width.saturating_sub(visible_width) / 2;
    format!("{}{text}", " ".repeat(pad))
}

/// A horizontal rule with a centered heading, `──── Guess 1 ────`
#[must_use]
pub fn rule(heading: &str, width: usize) -> String {
    let title = format!(" {heading} ");
    let remaining = width.saturating_sub(title.chars().count());
    let left = remaining / 2;
    let right = remaining - left;
    format!("{}{title}{}", "─".repeat(left), "─".repeat(right))
}

/// Join letters as `A, E`
#[must_use]
pub fn letter_list(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_fills_width() {
        let line = rule("Guess 1", 40);
        assert_eq!(line.chars().count(), 40);
        assert!(line.contains(" Guess 1 "));
        assert!(line.starts_with('─'));
        assert!(line.ends_with('─'));
    }

    #[test]
    fn rule_wider_than_width_is_just_title() {
        assert_eq!(rule("Game Over", 4), " Game Over ");
    }

    #[test]
    fn center_pads_left() {
        assert_eq!(center("ABCDE", 5, 15), "     ABCDE");
        assert_eq!(center("ABCDE", 5, 3), "ABCDE");
    }

    #[test]
    fn letter_list_is_comma_separated() {
        let letters: BTreeSet<char> = ['E', 'A'].into_iter().collect();
        assert_eq!(letter_list(&letters), "A, E");
        assert_eq!(letter_list(&BTreeSet::new()), "");
    }

    #[test]
    fn uncolored_row_is_plain_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let row = styled_row(Some((&word, [LetterClass::Wrong; NUM_LETTERS])));
        assert_eq!(row, "CRANE");
        assert_eq!(styled_row(None), "_____");
    }
}
