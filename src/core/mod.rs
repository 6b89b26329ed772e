//! Core domain types for the word game
//!
//! Symbols, words and scoring. Everything here is pure and has no I/O.

mod pattern;
mod symbol;
mod word;

pub use pattern::{Pattern, Verdict};
pub use symbol::{DIGRAPHS, Symbol, tokenize};
pub use word::{WORD_LENGTH, Word, WordError};
