//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, verdict_tile};
use crate::commands::{AnalysisResult, DailyResult, ScoreResult};
use crate::core::{Symbol, WORD_LENGTH};
use crate::game::keyboard::{BACKSPACE_KEY, ENTER_KEY, KEYBOARD_LAYOUT};
use crate::game::{KeyStates, MAX_GUESSES, Session};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_cyan().bold()
    );
    println!(
        "  {}",
        colored_row(result.guess.symbols(), result.pattern)
    );
    println!("  {}", result.pattern.to_emoji());
    println!(
        "  {} correct, {} present",
        result.pattern.count_correct(),
        result.pattern.count_present()
    );
}

/// Print the word belonging to a day
pub fn print_daily_result(result: &DailyResult, reveal: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Date:   {}", result.date.to_string().bright_yellow());
    println!("Day:    {}", result.day_number);
    println!("Index:  {} of {}", result.index, result.list_len);
    if reveal {
        println!("Word:   {}", result.word.bright_green().bold());
    } else {
        println!("Word:   {}", "(hidden, pass --reveal)".bright_black());
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_answers.max(1) as f64).log2();
    let bar = create_progress_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_answers);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", result.distinct_patterns);
    println!("   Worst case:  {} answers remain", result.largest_bucket);
    println!(
        "   Expected:    {:.1} answers remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
    for &(pattern, count) in result.buckets.iter().take(10) {
        let width = create_progress_bar(count as f64, result.largest_bucket as f64, 20);
        println!("   {} {} {count:4}", pattern.to_emoji(), width.green());
    }
}

/// Board lines for the line-based game: scored rows, then empty rows
#[must_use]
pub fn board_lines(session: &Session) -> Vec<String> {
    let mut lines: Vec<String> = session
        .rows()
        .iter()
        .map(|row| colored_row(row.guess.symbols(), row.pattern))
        .collect();

    let empty = vec!["[ ]"; WORD_LENGTH].join(" ");
    while lines.len() < MAX_GUESSES {
        lines.push(empty.clone());
    }
    lines
}

/// The on-screen keyboard as one line, symbols colored by best known state
#[must_use]
pub fn keyboard_line(states: &KeyStates) -> String {
    KEYBOARD_LAYOUT
        .iter()
        .filter(|&&label| label != BACKSPACE_KEY && label != ENTER_KEY)
        .map(|&label| {
            let symbol = Symbol::new(label);
            match states.best_state(&symbol) {
                Some(verdict) => verdict_tile(&symbol, verdict).to_string(),
                None => format!(" {symbol} "),
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
