//! Interactive TUI interface
//!
//! Board and on-screen keyboard rendered with ratatui.

mod app;
mod rendering;

pub use app::{App, KEYBOARD_COLUMNS, Message, MessageStyle, Statistics, run_tui};
