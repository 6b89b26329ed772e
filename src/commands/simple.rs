//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: each guess is typed as a whole word.

use crate::core::{Symbol, WORD_LENGTH, tokenize};
use crate::game::{MAX_GUESSES, Session, SubmitOutcome};
use crate::output::display::{board_lines, keyboard_line};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads one guess per line from `input` until the game ends, the player
/// types `quit`, or input runs out. Returns the share text of a won game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<Option<String>> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║      Comanche Word Game - Simple Mode        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-symbol word in {MAX_GUESSES} tries. kw and ts count as one symbol."
    )?;
    writeln!(out, "Commands: 'keys' to show the keyboard, 'quit' to exit\n")?;

    while !session.status().is_over() {
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.current_row() + 1);
        let Some(line) = read_line(&mut input, out, &prompt)? else {
            writeln!(out)?;
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 The word was: {}\n", session.secret())?;
                return Ok(None);
            }
            "keys" => {
                writeln!(out, "{}\n", keyboard_line(session.key_states()))?;
                continue;
            }
            _ => {}
        }

        let symbols = tokenize(&line.to_lowercase());
        if symbols.len() > WORD_LENGTH {
            writeln!(out, "❌ Too many letters ({WORD_LENGTH} symbols needed)\n")?;
            continue;
        }

        let outcome = submit_symbols(session, symbols);

        if let SubmitOutcome::Rejected(_) = outcome {
            if let Some(message) = outcome.message() {
                writeln!(out, "❌ {message}\n")?;
            }
            continue;
        }

        for row in board_lines(session) {
            writeln!(out, "  {row}")?;
        }
        writeln!(out)?;
        if let Some(message) = outcome.message() {
            writeln!(out, "{message}\n")?;
        }
    }

    let share = session.share_text();
    if let Some(text) = &share {
        writeln!(out, "Share:\n{text}\n")?;
    }
    Ok(share)
}

/// Type the symbols into an empty buffer and submit
///
/// The buffer is cleared again when the guess is rejected, since every line
/// is a fresh guess.
fn submit_symbols(session: &mut Session, symbols: Vec<Symbol>) -> SubmitOutcome {
    for symbol in symbols {
        session.push_symbol(symbol);
    }
    let outcome = session.submit();
    if matches!(outcome, SubmitOutcome::Rejected(_)) {
        while session.pop_symbol().is_some() {}
    }
    outcome
}

/// Get user input with a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read guess")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
