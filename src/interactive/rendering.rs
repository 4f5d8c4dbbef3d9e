//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{LetterClass, MAX_GUESSES, NUM_LETTERS, Word};
use crate::game::GameStatus;
use crate::output::formatters::{UNFILLED, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Min(7),                         // Letters + messages
            Constraint::Length(3),                      // Input area
            Constraint::Length(1),                      // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_letters(f, app, middle[0]);
    render_messages(f, app, middle[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌿 WYRDL 🌿")
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

fn tile_style(class: Option<LetterClass>) -> Style {
    match class {
        Some(LetterClass::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::Misplaced) => Style::default()
            .fg(Color::White)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::Wrong) => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0x66, 0x66, 0x66)),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn board_line(row: Option<(&Word, [LetterClass; NUM_LETTERS])>) -> Line<'static> {
    let tiles: Vec<Span> = match row {
        Some((word, classes)) => word
            .chars()
            .iter()
            .zip(classes)
            .map(|(&letter, class)| {
                Span::styled(format!(" {} ", char::from(letter)), tile_style(Some(class)))
            })
            .collect(),
        None => (0..NUM_LETTERS)
            .map(|_| Span::styled(format!(" {UNFILLED} "), tile_style(None)))
            .collect(),
    };
    Line::from(tiles)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.game.rows().map(board_line).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(summary) = app.last_summary() {
        vec![
            Line::from(vec![
                Span::raw("Correct:   "),
                Span::styled(
                    letter_list(&summary.correct),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::raw("Misplaced: "),
                Span::styled(
                    letter_list(&summary.misplaced),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::raw("Wrong:     "),
                Span::styled(
                    letter_list(&summary.wrong),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]
    } else {
        vec![Line::from("No guesses yet")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Last Guess ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.game.status() {
        GameStatus::Won => (" Solved! | Press 'q' to quit ", Color::Green),
        GameStatus::Lost => (" Out of guesses | Press 'q' to quit ", Color::Red),
        GameStatus::Playing { .. } => (" Guess word (Enter to submit) ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.game.status() {
        GameStatus::Playing { round } => {
            format!("Guess {}/{MAX_GUESSES} | Esc: Quit", round + 1)
        }
        GameStatus::Won | GameStatus::Lost => "Game Over | q: Quit".to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
