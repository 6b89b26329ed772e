//! Alphabet symbols and word tokenization
//!
//! A symbol is one unit of the game alphabet. Most symbols are a single
//! user-perceived character (a base letter together with any combining
//! diacritics, e.g. `a̠`), but a small fixed set of two-letter digraphs are
//! also single symbols.

use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Two-letter sequences that always form a single symbol
pub const DIGRAPHS: [&str; 2] = ["ts", "kw"];

/// One unit of the game alphabet, stored in NFC form
///
/// Two symbols are equal when their canonical composed forms are equal, so
/// `"a\u{301}"` and `"á"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from text, normalizing it to NFC
    ///
    /// No check is made that `text` is a single unit; use [`tokenize`] to
    /// split arbitrary text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.nfc().collect())
    }

    /// The NFC text of this symbol
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this symbol is one of the reserved digraphs
    #[must_use]
    pub fn is_digraph(&self) -> bool {
        DIGRAPHS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Split text into symbols
///
/// Scans left to right. When the next two characters spell a reserved
/// digraph they are consumed together, otherwise one grapheme cluster is
/// consumed. The input is normalized to NFC first so precomposed and
/// decomposed spellings tokenize identically.
///
/// # Examples
/// ```
/// use comanche_word_game::core::tokenize;
///
/// let symbols: Vec<String> = tokenize("kwitsa").iter().map(ToString::to_string).collect();
/// assert_eq!(symbols, ["kw", "i", "ts", "a"]);
///
/// // Combining macron below stays on its base letter
/// assert_eq!(tokenize("pa\u{320}hi").len(), 4);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Symbol> {
    let normalized: String = text.nfc().collect();
    let graphemes: Vec<&str> = normalized.graphemes(true).collect();

    let mut symbols = Vec::with_capacity(graphemes.len());
    let mut i = 0;
    while i < graphemes.len() {
        if let Some(&next) = graphemes.get(i + 1) {
            let pair = [graphemes[i], next].concat();
            if DIGRAPHS.contains(&pair.as_str()) {
                symbols.push(Symbol(pair));
                i += 2;
                continue;
            }
        }
        symbols.push(Symbol(graphemes[i].to_string()));
        i += 1;
    }

    symbols
}
