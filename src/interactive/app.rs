//! TUI application state and logic

use crate::game::keyboard::{KEYBOARD_LAYOUT, Key};
use crate::game::{GameConfig, GameStatus, MAX_GUESSES, Session, SubmitOutcome};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use unicode_normalization::char::is_combining_mark;

/// Keys per row of the on-screen keyboard
pub const KEYBOARD_COLUMNS: usize = 10;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub config: &'a GameConfig,
    pub messages: Vec<Message>,
    /// Index into `KEYBOARD_LAYOUT` of the highlighted key
    pub selected_key: usize,
    pub share_text: Option<String>,
    pub stats: Statistics,
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

/// Results of the games played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }

    /// One line summary for the status bar
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Games: {} | Win Rate: {:.0}%", self.total_games, self.win_rate())
    }

    /// Wins per guess count, e.g. `1:0 2:1 3:0 4:0 5:0 6:0`
    #[must_use]
    pub fn distribution_line(&self) -> String {
        (1..=MAX_GUESSES)
            .map(|guesses| format!("{guesses}:{}", self.guess_distribution[guesses]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, config: &'a GameConfig) -> Self {
        let mut app = Self {
            session,
            config,
            messages: Vec::new(),
            selected_key: 0,
            share_text: None,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Arrows + Space pick a key, or type letters. Enter submits.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one on-screen key press
    ///
    /// Typing clears old messages, the same way the web board does.
    pub fn handle_key(&mut self, key: &Key) {
        self.messages.clear();

        let Some(outcome) = self.session.press(key) else {
            return;
        };

        match &outcome {
            SubmitOutcome::Rejected(_) => {
                if let Some(text) = outcome.message() {
                    self.add_message(&text, MessageStyle::Error);
                }
            }
            SubmitOutcome::Continue { .. } => {}
            SubmitOutcome::Won { guesses, .. } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if *guesses <= MAX_GUESSES {
                    self.stats.guess_distribution[*guesses] += 1;
                }
                self.share_text = self.session.share_text();
                if let Some(text) = outcome.message() {
                    self.add_message(&text, MessageStyle::Success);
                }
                self.add_game_over_hint();
            }
            SubmitOutcome::Lost { .. } => {
                self.stats.total_games += 1;
                if let Some(text) = outcome.message() {
                    self.add_message(&text, MessageStyle::Error);
                }
                self.add_game_over_hint();
            }
        }
    }

    /// Press the highlighted on-screen key
    pub fn press_selected(&mut self) {
        let key = Key::from_label(KEYBOARD_LAYOUT[self.selected_key]);
        self.handle_key(&key);
    }

    /// Type a character from the physical keyboard
    ///
    /// Accepts characters that are on-screen keys by themselves plus combining
    /// marks; `'` stands in for the glottal stop. `t` `s` and `k` `w` join into
    /// their digraph keys.
    pub fn type_char(&mut self, c: char) {
        let c = if c == '\'' { 'ʔ' } else { c.to_lowercase().next().unwrap_or(c) };
        let mut buf = [0u8; 4];
        let label: &str = c.encode_utf8(&mut buf);

        match Key::from_label(label) {
            Key::Symbol(_) if KEYBOARD_LAYOUT.contains(&label) || is_combining_mark(c) => {
                self.messages.clear();
                self.session.push_char(c);
            }
            Key::Symbol(_) => {}
            key => self.handle_key(&key),
        }
    }

    /// Move the keyboard highlight by whole columns and rows, clamped to the layout
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let columns = KEYBOARD_COLUMNS as isize;
        let last = KEYBOARD_LAYOUT.len() as isize - 1;
        let current = self.selected_key as isize;

        let target = match (dx, dy) {
            (0, dy) => current + dy * columns,
            (dx, _) => current + dx,
        };
        if (0..=last).contains(&target) {
            self.selected_key = target as usize;
        }
    }

    /// Start another game with a fresh random secret
    ///
    /// Only practice games can be replayed; the daily word is fixed for the day.
    pub fn new_game(&mut self) {
        if !self.config.practice {
            self.add_message("Come back tomorrow for a new word!", MessageStyle::Info);
            return;
        }

        let dictionary = self.session.dictionary();
        if let Some(secret) = self.config.choose_secret(dictionary) {
            self.session.reset(secret.clone());
            self.share_text = None;
            self.messages.clear();
            self.add_message("New practice game started!", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        for line in text.lines() {
            self.messages.push(Message {
                text: line.to_string(),
                style,
            });
        }

        // Keep only last 5 messages
        while self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn add_game_over_hint(&mut self) {
        let distribution = format!("Wins by guesses: {}", self.stats.distribution_line());
        self.add_message(&distribution, MessageStyle::Info);

        let hint = if self.config.practice {
            "Press 'n' for a new game or 'q' to quit."
        } else {
            "Press 'q' to quit."
        };
        self.add_message(hint, MessageStyle::Info);
    }

    /// Route a terminal key event
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let game_over = self.session.status().is_over();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') if game_over => self.new_game(),
            KeyCode::Left => self.move_selection(-1, 0),
            KeyCode::Right => self.move_selection(1, 0),
            KeyCode::Up => self.move_selection(0, -1),
            KeyCode::Down => self.move_selection(0, 1),
            KeyCode::Char(' ') => self.press_selected(),
            KeyCode::Enter => self.handle_key(&Key::Enter),
            KeyCode::Backspace => self.handle_key(&Key::Backspace),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.session.status(), GameStatus::Won { .. })
    }
}

/// Run the TUI application
///
/// Returns the share text when the game was won, so it can be printed after
/// the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
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
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.on_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_text)
}
