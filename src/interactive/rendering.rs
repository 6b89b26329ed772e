//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message panels for the game.

use super::app::{App, KEYBOARD_COLUMNS, MessageStyle};
use crate::core::{Symbol, Verdict, WORD_LENGTH};
use crate::game::keyboard::{KEYBOARD_LAYOUT, Key};
use crate::game::{GameStatus, MAX_GUESSES};
use crate::output::formatters::verdict_rgb;
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
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(4),                         // Messages
            Constraint::Length(1),                      // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Style for a tile or key with the given verdict
fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(verdict) => {
            let (r, g, b) = verdict_rgb(verdict);
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(r, g, b))
                .add_modifier(Modifier::BOLD)
        }
        None => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let subtitle = if app.config.practice {
        "practice".to_string()
    } else {
        app.config.date.to_string()
    };

    let header = Paragraph::new(format!("{} ({subtitle})", app.config.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {text:^2} "), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in session.rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (symbol, &verdict) in row.guess.symbols().iter().zip(row.pattern.verdicts()) {
            spans.push(tile(symbol.as_str(), verdict_style(Some(verdict))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !session.status().is_over() {
        let typed = session.current_guess();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let text = typed.get(i).map_or("·", Symbol::as_str);
            spans.push(tile(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_GUESSES {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile("", Style::default().fg(Color::DarkGray)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.key_states();

    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .chunks(KEYBOARD_COLUMNS)
        .enumerate()
        .map(|(row, labels)| {
            let spans: Vec<Span> = labels
                .iter()
                .enumerate()
                .flat_map(|(col, &label)| {
                    let index = row * KEYBOARD_COLUMNS + col;
                    let verdict = match Key::from_label(label) {
                        Key::Symbol(symbol) => states.best_state(&symbol),
                        Key::Backspace | Key::Enter => None,
                    };
                    let mut style = verdict_style(verdict);
                    if index == app.selected_key {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    [tile(label, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
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

    if let Some(share) = &app.share_text {
        items.push(ListItem::new(""));
        for line in share.lines() {
            items.push(ListItem::new(line.to_string()).style(Style::default().fg(Color::Cyan)));
        }
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let status_text = match app.session.status() {
        GameStatus::InProgress => format!("Guess {}/{MAX_GUESSES}", app.session.current_row() + 1),
        GameStatus::Won { guesses } => format!("Won in {guesses}/{MAX_GUESSES}"),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let stats = Paragraph::new(app.stats.summary()).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.status().is_over() {
        if app.config.practice {
            "q: Quit | n: New Game"
        } else {
            "q: Quit"
        }
    } else {
        "Type / ←→↑↓ + Space: Key | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, Session};
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_keyboard_and_title() {
        let dictionary = Dictionary::embedded();
        let config = GameConfig::default();
        let mut app = App::new(Session::new(&dictionary, Word::new("mato").unwrap()), &config);
        for symbol in crate::core::tokenize("puku") {
            app.handle_key(&Key::Symbol(symbol));
        }
        app.handle_key(&Key::Enter);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Comanche Word Game"));
        assert!(text.contains("Board"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("kw"));
        assert!(text.contains("Guess 2/6"));
        assert!(text.contains("Games: 0 | Win Rate: 0%"));
    }
}
