//! Score command
//!
//! Scores one guess against one answer without a game around it.

use crate::core::{Pattern, Word};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `answer`
///
/// Neither word needs to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word does not split into four symbols.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let pattern = Pattern::calculate(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        pattern,
    })
}
