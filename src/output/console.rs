//! Line-based console
//!
//! The game loop talks to the terminal only through [`Console`], so it can be
//! driven by a real terminal or by a script in tests.

use super::formatters::{CONSOLE_WIDTH, center, rule, styled_row};
use crate::core::NUM_LETTERS;
use crate::game::{Game, GameStatus};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Terminal capabilities the game loop needs
pub trait Console {
    /// Prompt and read one line, without its line ending
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Redraw the board under a heading
    fn render(&mut self, heading: &str, game: &Game) -> io::Result<()>;

    /// Report a recoverable problem, such as a rejected guess
    fn warn(&mut self, message: &str) -> io::Result<()>;

    /// Draw the final board and reveal the secret
    fn game_over(&mut self, game: &Game) -> io::Result<()>;
}

/// Console over any reader/writer pair, styled with ANSI colors
pub struct TermConsole<R, W> {
    input: R,
    output: W,
    width: usize,
}

impl TermConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TermConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            width: CONSOLE_WIDTH,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TermConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "\n{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn render(&mut self, heading: &str, game: &Game) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.output, "{}", rule(heading, self.width).bold().blue())?;
        writeln!(self.output)?;

        for row in game.rows() {
            writeln!(
                self.output,
                "{}",
                center(&styled_row(row), NUM_LETTERS, self.width)
            )?;
        }

        self.output.flush()
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.red().on_yellow())
    }

    fn game_over(&mut self, game: &Game) -> io::Result<()> {
        self.render("Game Over", game)?;

        let secret = game.secret();
        let message = if game.status() == GameStatus::Won {
            format!("Correct, the word is {secret}")
                .bold()
                .white()
                .on_green()
        } else {
            format!("Sorry, the word was {secret}")
                .bold()
                .white()
                .on_red()
        };
        writeln!(self.output, "\n{message}")?;
        self.output.flush()
    }
}
