//! Comanche Word Game
//!
//! A daily four-symbol word guessing game for the terminal. Symbols may be
//! digraphs (`kw`, `ts`) or letters with combining diacritics (`a̠`), and every
//! guess is scored with the duplicate-aware two-pass rule.
//!
//! # Quick Start
//!
//! ```rust
//! use comanche_word_game::core::{Pattern, Word};
//!
//! let guess = Word::new("kwasi").unwrap();
//! let answer = Word::new("mato").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! println!("{}", pattern.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
