//! Game session and guess submission
//!
//! A [`Session`] owns everything one game needs: the secret, the guess being
//! typed, the rows already scored and the keyboard states. It is created per
//! game and driven by the front end one key press at a time.

use super::keyboard::{Key, KeyStates};
use crate::core::{Pattern, Symbol, WORD_LENGTH, Word, tokenize};
use unicode_normalization::char::is_combining_mark;
use crate::wordlists::Dictionary;
use std::fmt;

/// Number of rows on the board
pub const MAX_GUESSES: usize = 6;

/// Title used in the share text
pub const TITLE: &str = "Comanche Word Game";

/// Message shown on a win
pub const WIN_MESSAGE: &str = "Tsaaku ʉnʉ\u{320}!\nYou got it!";

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { guesses: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    NotInWordList,
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters ({WORD_LENGTH} needed)"),
            Self::NotInWordList => write!(f, "Invalid word"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

/// Result of submitting the current guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing changed
    Rejected(Rejection),
    /// Scored, and there are rows left
    Continue { pattern: Pattern },
    /// Scored and equal to the secret
    Won { pattern: Pattern, guesses: usize },
    /// Scored on the last row without a win
    Lost { pattern: Pattern, secret: Word },
}

impl SubmitOutcome {
    /// Text for the message line, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rejected(reason) => Some(reason.to_string()),
            Self::Continue { .. } => None,
            Self::Won { .. } => Some(WIN_MESSAGE.to_string()),
            Self::Lost { secret, .. } => Some(format!("The word was: {secret}")),
        }
    }
}

/// One scored row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub pattern: Pattern,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    title: String,
    guess: Vec<Symbol>,
    rows: Vec<Row>,
    key_states: KeyStates,
    status: GameStatus,
}

impl<'a> Session<'a> {
    /// Start a game with the given secret
    ///
    /// The secret does not need to be in the dictionary, but guesses do.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, secret: Word) -> Self {
        Self {
            dictionary,
            secret,
            title: TITLE.to_string(),
            guess: Vec::with_capacity(WORD_LENGTH),
            rows: Vec::with_capacity(MAX_GUESSES),
            key_states: KeyStates::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Use a different title in the share text
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Throw away all progress and start over with a new secret
    pub fn reset(&mut self, secret: Word) {
        self.secret = secret;
        self.guess.clear();
        self.rows.clear();
        self.key_states.clear();
        self.status = GameStatus::InProgress;
    }

    /// Append a symbol to the current guess
    ///
    /// Ignored (returns false) when the guess is full or the game is over.
    pub fn push_symbol(&mut self, symbol: Symbol) -> bool {
        if self.status.is_over() || self.guess.len() >= WORD_LENGTH {
            return false;
        }
        self.guess.push(symbol);
        true
    }

    /// Append one typed character to the current guess
    ///
    /// The character joins the last symbol when the two spell a single symbol:
    /// `t` then `s` becomes `ts`, and a combining mark lands on its vowel. A
    /// combining mark with nothing to attach to is ignored.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.status.is_over() {
            return false;
        }

        let mut buf = [0u8; 4];
        let typed: &str = c.encode_utf8(&mut buf);

        if let Some(last) = self.guess.last_mut() {
            let mut joined = tokenize(&format!("{last}{typed}"));
            if joined.len() == 1 {
                let symbol = joined.remove(0);
                tracing::trace!(%symbol, digraph = symbol.is_digraph(), "joined typed character");
                *last = symbol;
                return true;
            }
        }

        if is_combining_mark(c) {
            return false;
        }
        self.push_symbol(Symbol::new(typed))
    }

    /// Remove the last symbol of the current guess
    pub fn pop_symbol(&mut self) -> Option<Symbol> {
        if self.status.is_over() {
            return None;
        }
        self.guess.pop()
    }

    /// Apply one on-screen key press
    ///
    /// Returns the submit outcome when the key was Enter.
    pub fn press(&mut self, key: &Key) -> Option<SubmitOutcome> {
        match key {
            Key::Symbol(symbol) => {
                self.push_symbol(symbol.clone());
                None
            }
            Key::Backspace => {
                self.pop_symbol();
                None
            }
            Key::Enter => Some(self.submit()),
        }
    }

    /// Score the current guess
    ///
    /// A guess is only scored when it has exactly [`WORD_LENGTH`] symbols and
    /// is in the dictionary; otherwise nothing changes. After a scored guess
    /// the buffer is cleared and the row advances.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_over() {
            return SubmitOutcome::Rejected(Rejection::GameOver);
        }

        let Ok(guess) = Word::from_symbols(&self.guess) else {
            return SubmitOutcome::Rejected(Rejection::TooShort);
        };

        if !self.dictionary.contains(&guess) {
            tracing::debug!(guess = %guess, "rejected guess not in word list");
            return SubmitOutcome::Rejected(Rejection::NotInWordList);
        }

        let pattern = Pattern::calculate(&guess, &self.secret);
        self.key_states.record(&guess, pattern);
        self.rows.push(Row { guess, pattern });
        self.guess.clear();

        let guesses = self.rows.len();
        tracing::debug!(row = guesses, pattern = %pattern.to_emoji(), "scored guess");

        if pattern.is_perfect() {
            self.status = GameStatus::Won { guesses };
            SubmitOutcome::Won { pattern, guesses }
        } else if guesses == MAX_GUESSES {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost {
                pattern,
                secret: self.secret.clone(),
            }
        } else {
            SubmitOutcome::Continue { pattern }
        }
    }

    /// Share text for a won game
    ///
    /// ```text
    /// Comanche Word Game 4 - 3/6
    /// ⬜🩵⬜⬜
    /// 🟦⬜🩵🟦
    /// 🟦🟦🟦🟦
    /// ```
    ///
    /// Returns `None` unless the game was won.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let GameStatus::Won { guesses } = self.status else {
            return None;
        };

        let mut text = format!("{} {WORD_LENGTH} - {guesses}/{MAX_GUESSES}", self.title);
        for row in &self.rows {
            text.push('\n');
            text.push_str(&row.pattern.to_emoji());
        }
        Some(text)
    }

    /// Symbols typed so far on the current row
    #[must_use]
    pub fn current_guess(&self) -> &[Symbol] {
        &self.guess
    }

    /// Index of the row being typed (equals the number of scored rows)
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn key_states(&self) -> &KeyStates {
        &self.key_states
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}
