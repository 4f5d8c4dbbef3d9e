//! Simple line-based game mode
//!
//! Clears the screen, shows the board, and reads one guess per line.

use crate::game::{Game, GameStatus};
use crate::output::{Console, TermConsole};
use crate::wordlists::select_secret;
use anyhow::{Result, bail};
use rand::Rng;

/// Play `game` to the end on `console`
///
/// Rejected guesses are reported and the same round is asked again, for as
/// long as the player keeps typing.
///
/// # Errors
///
/// Returns an error if the console fails or input ends before the game does.
pub fn run_game<C: Console>(game: &mut Game, console: &mut C) -> Result<GameStatus> {
    while let GameStatus::Playing { round } = game.status() {
        console.render(&format!("Guess {}", round + 1), game)?;

        loop {
            let Some(input) = console.read_line("Guess word:")? else {
                bail!("Input closed before the game ended");
            };

            match game.submit(&input) {
                Ok(_) => break,
                Err(err) => {
                    log::debug!("Rejected {input:?}: {err}");
                    console.warn(&err.to_string())?;
                }
            }
        }
    }

    console.game_over(game)?;
    Ok(game.status())
}

/// Pick a secret from `candidates` and play a game on stdin/stdout
///
/// # Errors
///
/// Returns an error if no candidate is a playable word, or if terminal I/O fails.
pub fn run_simple<S, R>(candidates: &[S], rng: &mut R) -> Result<GameStatus>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let secret = select_secret(candidates, rng)?;
    let mut game = Game::new(secret);
    let mut console = TermConsole::stdio();

    let status = run_game(&mut game, &mut console)?;
    log::info!(
        "Game finished: {status:?} after {} guesses",
        game.history().len()
    );
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::output::formatters::styled_row;
    use std::collections::VecDeque;
    use std::io::{self, Cursor};

    /// Console fed from a fixed list of lines, recording what it was asked to show
    #[derive(Default)]
    struct ScriptedConsole {
        lines: VecDeque<String>,
        headings: Vec<String>,
        warnings: Vec<String>,
        final_board: Vec<String>,
        game_over_calls: usize,
    }

    impl ScriptedConsole {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.lines.pop_front())
        }

        fn render(&mut self, heading: &str, _game: &Game) -> io::Result<()> {
            self.headings.push(heading.to_string());
            Ok(())
        }

        fn warn(&mut self, message: &str) -> io::Result<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }

        fn game_over(&mut self, game: &Game) -> io::Result<()> {
            self.final_board = game.rows().map(styled_row).collect();
            self.game_over_calls += 1;
            Ok(())
        }
    }

    fn snake_game() -> Game {
        Game::new(Word::new("snake").unwrap())
    }

    #[test]
    fn won_after_second_round() {
        let mut game = snake_game();
        let mut console = ScriptedConsole::new(&["crane", "snake"]);

        let status = run_game(&mut game, &mut console).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.history().len(), 2);
        assert_eq!(console.headings, ["Guess 1", "Guess 2"]);
        assert!(console.warnings.is_empty());
        assert_eq!(console.game_over_calls, 1);
    }

    #[test]
    fn lost_after_six_misses() {
        colored::control::set_override(false);
        let mut game = snake_game();
        let mut console =
            ScriptedConsole::new(&["crane", "slate", "audio", "ghost", "pizza", "lemon"]);

        let status = run_game(&mut game, &mut console).unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(console.headings.len(), 6);
        assert_eq!(console.game_over_calls, 1);
        assert_eq!(console.final_board.len(), 6);
        assert_eq!(console.final_board[5], "LEMON");
    }

    #[test]
    fn invalid_input_reprompts_same_round() {
        let mut game = snake_game();
        let mut console =
            ScriptedConsole::new(&["crane", "CRANE", "worm", "it'll", "snake"]);

        let status = run_game(&mut game, &mut console).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(console.headings, ["Guess 1", "Guess 2"]);
        assert_eq!(
            console.warnings,
            [
                "You've already guessed CRANE.",
                "Your guess must be 5 letters",
                "Invalid letter: '''. Please use English letters",
            ]
        );
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut game = snake_game();
        let mut console = ScriptedConsole::new(&["crane"]);

        let err = run_game(&mut game, &mut console).unwrap_err();
        assert!(err.to_string().contains("Input closed"));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn finished_game_only_shows_final_screen() {
        let mut game = snake_game();
        game.submit("snake").unwrap();
        let mut console = ScriptedConsole::new(&[]);

        assert_eq!(run_game(&mut game, &mut console).unwrap(), GameStatus::Won);
        assert!(console.headings.is_empty());
        assert_eq!(console.game_over_calls, 1);
    }

    #[test]
    fn lost_game_on_terminal_reveals_secret() {
        colored::control::set_override(false);
        let mut game = snake_game();
        let input = Cursor::new(b"crane\nslate\naudio\nghost\npizza\nlemon\n".to_vec());
        let mut console = TermConsole::new(input, Vec::new());

        let status = run_game(&mut game, &mut console).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains("Guess 6"));
        assert!(out.contains("Game Over"));
        assert!(out.contains("Sorry, the word was SNAKE"));
        assert!(!out.contains("Correct, the word is"));
    }
}
