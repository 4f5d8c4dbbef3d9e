//! Display functions for command results

use super::formatters::{letter_list, styled_row};
use crate::commands::ClassifyResult;
use colored::Colorize;

/// Print the feedback for one guess against a secret
pub fn print_classify_result(result: &ClassifyResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.secret.text().bright_yellow().bold()
    );
    println!(
        "\n  {}  {}",
        styled_row(Some((&result.guess, result.classes))),
        result
            .classes
            .iter()
            .map(|class| class.to_emoji())
            .collect::<String>()
    );

    println!();
    println!("Correct letters: {}", letter_list(&result.summary.correct).green());
    println!(
        "Misplaced letters: {}",
        letter_list(&result.summary.misplaced).yellow()
    );
    println!("Wrong letters: {}", letter_list(&result.summary.wrong).bright_black());
}
