//! Guess scoring and feedback patterns
//!
//! A pattern holds one [`Verdict`] per position of a scored guess. Verdicts are
//! ordered by rank so the best-known state of a symbol can be tracked with a
//! plain comparison:
//! - 0 = Absent (symbol not in the answer, or all copies already used)
//! - 1 = Present (symbol in the answer, wrong position)
//! - 2 = Correct (symbol in the correct position)

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Scoring outcome for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Verdict {
    /// Glyph used in share text
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟦',
            Self::Present => '🩵',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name, matching the style class of a tile
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback pattern for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Verdict; WORD_LENGTH]);

impl Pattern {
    /// All positions correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Score `guess` against `answer`
    ///
    /// Duplicate symbols are handled in two passes:
    /// 1. Exact matches become `Correct`; every unmatched answer symbol is
    ///    added to a pool of available symbols.
    /// 2. Remaining guess positions, left to right, become `Present` while the
    ///    pool still holds that symbol, otherwise they stay `Absent`.
    ///
    /// So a symbol occurring N times in the answer is never marked
    /// correct or present more than N times in total, and exact matches always
    /// take priority over misplaced ones.
    ///
    /// # Examples
    /// ```
    /// use comanche_word_game::core::{Pattern, Verdict, Word};
    ///
    /// let guess = Word::new("ttak").unwrap();
    /// let answer = Word::new("taat").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.verdicts(),
    ///     &[Verdict::Correct, Verdict::Present, Verdict::Present, Verdict::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut answer_available = FxHashMap::default();

        // First pass: exact matches, pool the rest of the answer
        for (i, (g, a)) in guess.symbols().iter().zip(answer.symbols()).enumerate() {
            if g == a {
                result[i] = Verdict::Correct;
            } else {
                *answer_available.entry(a).or_insert(0u8) += 1;
            }
        }

        // Second pass: misplaced symbols, while the pool lasts
        for (i, g) in guess.symbols().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(g)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of present (misplaced) positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert pattern to its share glyph row, e.g. "🟦🩵⬜🟦"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.glyph()).collect()
    }
}
