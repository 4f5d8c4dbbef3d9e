//! TUI application state and logic

use crate::core::LetterSummary;
use crate::game::{Game, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the box accepts; anything longer is a wrong length anyway
const MAX_INPUT: usize = 16;

/// Application state
pub struct App {
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the five-letter word. You have six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Letter sets of the most recent guess
    #[must_use]
    pub fn last_summary(&self) -> Option<LetterSummary> {
        self.game
            .history()
            .last()
            .map(|guess| LetterSummary::new(guess, self.game.secret()))
    }

    /// Submit the input box as a guess
    pub fn handle_submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Ok(GameStatus::Won) => {
                let text = format!("Correct, the word is {}", self.game.secret());
                self.add_message(&text, MessageStyle::Success);
            }
            Ok(GameStatus::Lost) => {
                let text = format!("Sorry, the word was {}", self.game.secret());
                self.add_message(&text, MessageStyle::Error);
            }
            Ok(GameStatus::Playing { .. }) => {
                let left = self.game.guesses_left();
                let text = format!("{left} {} left", if left == 1 { "guess" } else { "guesses" });
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => {
                log::debug!("Rejected {input:?}: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.game.is_over() => {
                // Only quitting is left once the game has ended
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.handle_submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<GameStatus> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<GameStatus> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game.status())
}
