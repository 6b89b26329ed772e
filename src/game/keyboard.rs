//! On-screen keyboard layout and best-known key states

use crate::core::{Pattern, Symbol, Verdict, Word};
use rustc_hash::FxHashMap;

/// Key that deletes the last symbol of the guess
pub const BACKSPACE_KEY: &str = "←";

/// Key that submits the guess
pub const ENTER_KEY: &str = "⏎";

/// On-screen keys in display order: consonants, vowels, underlined vowels,
/// then the two action keys
pub const KEYBOARD_LAYOUT: [&str; 28] = [
    "b", "h", "k", "kw", "m", "n", "p", "r", "s", "t", "ts", "w", "y", "ʔ", "a", "e", "i", "o",
    "u", "ʉ", "a\u{320}", "e\u{320}", "i\u{320}", "o\u{320}", "u\u{320}", "ʉ\u{320}",
    BACKSPACE_KEY, ENTER_KEY,
];

/// A press on the on-screen keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Symbol(Symbol),
    Backspace,
    Enter,
}

impl Key {
    /// Interpret the label of an on-screen key
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            BACKSPACE_KEY => Self::Backspace,
            ENTER_KEY => Self::Enter,
            symbol => Self::Symbol(Symbol::new(symbol)),
        }
    }
}

/// Best verdict seen so far for each symbol this session
///
/// A symbol's state only ever moves up the `absent < present < correct`
/// order.
#[derive(Debug, Default, Clone)]
pub struct KeyStates {
    states: FxHashMap<Symbol, Verdict>,
}

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `verdict` for `symbol` unless an equal or better one is known
    ///
    /// Returns true when the stored state changed.
    pub fn update(&mut self, symbol: &Symbol, verdict: Verdict) -> bool {
        match self.states.get_mut(symbol) {
            Some(current) if verdict > *current => {
                *current = verdict;
                true
            }
            Some(_) => false,
            None => {
                self.states.insert(symbol.clone(), verdict);
                true
            }
        }
    }

    /// Fold a whole scored guess into the key states
    pub fn record(&mut self, guess: &Word, pattern: Pattern) {
        for (symbol, &verdict) in guess.symbols().iter().zip(pattern.verdicts()) {
            self.update(symbol, verdict);
        }
    }

    /// Best known verdict for a symbol, `None` if it was never guessed
    #[must_use]
    pub fn best_state(&self, symbol: &Symbol) -> Option<Verdict> {
        self.states.get(symbol).copied()
    }

    /// Number of symbols with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
