//! Formatting utilities for terminal output

use crate::core::{Pattern, Symbol, Verdict};
use colored::{ColoredString, Colorize};

/// Tile colors as RGB, matching the board of the web game
#[must_use]
pub const fn verdict_rgb(verdict: Verdict) -> (u8, u8, u8) {
    match verdict {
        Verdict::Correct => (0x66, 0xb3, 0xff),
        Verdict::Present => (0xcc, 0xe4, 0xff),
        Verdict::Absent => (0xcc, 0xcc, 0xcc),
    }
}

/// A symbol rendered as a colored tile, e.g. ` kw `
#[must_use]
pub fn verdict_tile(symbol: &Symbol, verdict: Verdict) -> ColoredString {
    let (r, g, b) = verdict_rgb(verdict);
    format!(" {symbol} ").black().bold().on_truecolor(r, g, b)
}

/// A scored row as colored tiles separated by spaces
#[must_use]
pub fn colored_row(symbols: &[Symbol], pattern: Pattern) -> String {
    symbols
        .iter()
        .zip(pattern.verdicts())
        .map(|(symbol, &verdict)| verdict_tile(symbol, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
