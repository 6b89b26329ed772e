//! Guess analysis command
//!
//! Scores a guess against every word of the dictionary as a possible answer
//! and reports how well the feedback splits the list.

use crate::core::{Pattern, Word};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub total_answers: usize,
    pub distinct_patterns: usize,
    pub largest_bucket: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
    /// Pattern buckets, largest first
    pub buckets: Vec<(Pattern, usize)>,
}

/// Analyze a guess against every dictionary word
///
/// # Errors
///
/// Returns an error if:
/// - The word does not split into four symbols
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, String> {
    let guess = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !dictionary.contains(&guess) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let counts = group_by_pattern(&guess, dictionary.words());
    let total_answers = dictionary.len();
    let entropy = shannon_entropy(&counts, total_answers);

    let mut buckets: Vec<(Pattern, usize)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_emoji().cmp(&b.0.to_emoji())));

    // Expected size of the bucket the answer falls in: Σ n² / N
    let expected_remaining = if total_answers == 0 {
        0.0
    } else {
        buckets.iter().map(|&(_, n)| (n * n) as f64).sum::<f64>() / total_answers as f64
    };

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_answers,
        distinct_patterns: buckets.len(),
        largest_bucket: buckets.first().map_or(0, |&(_, n)| n),
        entropy,
        expected_remaining,
        buckets,
    })
}

/// Group answers by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, answers: &[Word]) -> FxHashMap<Pattern, usize> {
    answers
        .par_iter()
        .fold(FxHashMap::default, |mut counts, answer| {
            *counts.entry(Pattern::calculate(guess, answer)).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, partial| {
            for (pattern, count) in partial {
                *merged.entry(pattern).or_insert(0) += count;
            }
            merged
        })
}

/// H = -Σ p * log₂(p)
fn shannon_entropy(counts: &FxHashMap<Pattern, usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn small_dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["mato", "puku", "tuhu", "pihi"]))
    }

    #[test]
    fn analyze_valid_word() {
        let dictionary = small_dictionary();
        let result = analyze_word("mato", &dictionary).unwrap();

        assert_eq!(result.word, "mato");
        assert_eq!(result.total_answers, 4);
        assert_eq!(result.buckets.iter().map(|&(_, n)| n).sum::<usize>(), 4);
        assert!(result.entropy > 0.0);
        assert!(result.entropy <= 2.0);
    }

    #[test]
    fn analyze_buckets_are_sorted_largest_first() {
        // puku and pihi share no symbol with mato; tuhu has a misplaced t
        let dictionary = small_dictionary();
        let result = analyze_word("mato", &dictionary).unwrap();

        assert_eq!(result.distinct_patterns, 3);
        assert_eq!(result.largest_bucket, 2);
        assert_eq!(result.buckets[0], (Pattern::new([crate::core::Verdict::Absent; 4]), 2));
        assert!((result.expected_remaining - 1.5).abs() < 1e-9);
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = small_dictionary();
        assert!(analyze_word("zzzz", &dictionary).is_err());
        assert!(analyze_word("toolong", &dictionary).is_err());
    }

    #[test]
    fn entropy_properties() {
        let dictionary = Dictionary::embedded();
        let result = analyze_word("kwasi", &dictionary).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (dictionary.len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= dictionary.len() as f64);
    }
}
