//! Word representation
//!
//! A Word stores exactly [`WORD_LENGTH`] symbols along with its normalized text.

use super::symbol::{Symbol, tokenize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Number of symbols in every word
pub const WORD_LENGTH: usize = 4;

/// A four-symbol word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    symbols: [Symbol; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 4 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Word is empty")]
    Empty,
}

impl Word {
    /// Create a new Word from text
    ///
    /// The text is trimmed, lowercased and normalized to NFC before being
    /// split into symbols.
    ///
    /// # Errors
    /// Returns `WordError` if the text is blank or does not split into
    /// exactly [`WORD_LENGTH`] symbols.
    ///
    /// # Examples
    /// ```
    /// use comanche_word_game::core::Word;
    ///
    /// let word = Word::new("kwasi").unwrap();
    /// assert_eq!(word.symbol_at(0).as_str(), "kw");
    ///
    /// assert!(Word::new("tuhupi").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text: String = text.trim().to_lowercase().as_str().nfc().collect();
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let symbols: [Symbol; WORD_LENGTH] = tokenize(&text)
            .try_into()
            .map_err(|rest: Vec<Symbol>| WordError::InvalidLength(rest.len()))?;

        Ok(Self { text, symbols })
    }

    /// Build a word from already tokenized symbols
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` when the count is not [`WORD_LENGTH`].
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, WordError> {
        let symbols: [Symbol; WORD_LENGTH] = symbols
            .to_vec()
            .try_into()
            .map_err(|rest: Vec<Symbol>| WordError::InvalidLength(rest.len()))?;
        let text = symbols.iter().map(Symbol::as_str).collect();

        Ok(Self { text, symbols })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the symbols of the word in order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; WORD_LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> &Symbol {
        &self.symbols[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("mato").unwrap();
        assert_eq!(word.text(), "mato");
        assert_eq!(word.symbol_at(0).as_str(), "m");
        assert_eq!(word.symbol_at(3).as_str(), "o");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("MATO").unwrap();
        assert_eq!(word.text(), "mato");

        let word2 = Word::new("  MaTo ").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_with_digraphs_counts_symbols() {
        // five letters, four symbols
        let word = Word::new("kwasi").unwrap();
        assert_eq!(word.symbols().len(), WORD_LENGTH);
        assert!(word.symbol_at(0).is_digraph());

        // six letters, four symbols
        assert!(Word::new("kwitsa").is_ok());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("tuhupi"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("tsa"), Err(WordError::InvalidLength(2))));
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
    }

    #[test]
    fn word_from_symbols() {
        let symbols = tokenize("pa\u{320}hi");
        let word = Word::from_symbols(&symbols).unwrap();
        assert_eq!(word, Word::new("pa\u{320}hi").unwrap());

        assert!(matches!(
            Word::from_symbols(&symbols[..3]),
            Err(WordError::InvalidLength(3))
        ));
    }

    #[test]
    fn word_with_repeated_symbols() {
        let word = Word::new("tʉtʉ").unwrap();
        assert_eq!(word.symbol_at(0), word.symbol_at(2));
        assert_eq!(word.symbol_at(1).as_str(), "ʉ");
    }

    #[test]
    fn word_equality_ignores_composition() {
        let composed = Word::new("t\u{e9}ma").unwrap();
        let decomposed = Word::new("te\u{301}ma").unwrap();
        assert_eq!(composed, decomposed);
        assert_eq!(composed.text(), decomposed.text());
    }

    #[test]
    fn word_display() {
        let word = Word::new("nʉmʉ").unwrap();
        assert_eq!(format!("{word}"), "nʉmʉ");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(6).to_string(),
            "Word must be exactly 4 symbols, got 6"
        );
    }
}
