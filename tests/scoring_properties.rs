//! Property tests for scoring and key state aggregation

use comanche_word_game::core::{Pattern, Symbol, Verdict, WORD_LENGTH, Word};
use comanche_word_game::game::KeyStates;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// A small alphabet so generated words share symbols often
const ALPHABET: [&str; 8] = ["t", "a", "k", "ts", "kw", "u", "a\u{320}", "ʉ"];

fn word_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), WORD_LENGTH).prop_map(|parts| {
        let symbols: Vec<Symbol> = parts.into_iter().map(Symbol::new).collect();
        Word::from_symbols(&symbols).expect("generated exactly WORD_LENGTH symbols")
    })
}

fn verdict_strategy() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::Absent),
        Just(Verdict::Present),
        Just(Verdict::Correct),
    ]
}

fn occurrences(word: &Word, symbol: &Symbol) -> usize {
    word.symbols().iter().filter(|s| *s == symbol).count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// A symbol is never credited more often than the answer holds it
    #[test]
    fn credited_symbols_bounded_by_answer(guess in word_strategy(), answer in word_strategy()) {
        let pattern = Pattern::calculate(&guess, &answer);

        for symbol in guess.symbols() {
            let credited = guess
                .symbols()
                .iter()
                .zip(pattern.verdicts())
                .filter(|(s, v)| *s == symbol && **v != Verdict::Absent)
                .count();
            prop_assert!(credited <= occurrences(&answer, symbol));
        }
    }

    /// Credited count is exactly min(guess count, answer count)
    #[test]
    fn credited_symbols_are_maximal(guess in word_strategy(), answer in word_strategy()) {
        let pattern = Pattern::calculate(&guess, &answer);

        for symbol in guess.symbols() {
            let credited = guess
                .symbols()
                .iter()
                .zip(pattern.verdicts())
                .filter(|(s, v)| *s == symbol && **v != Verdict::Absent)
                .count();
            let expected = occurrences(&guess, symbol).min(occurrences(&answer, symbol));
            prop_assert_eq!(credited, expected);
        }
    }

    /// Correct exactly where the symbols line up
    #[test]
    fn correct_iff_same_position(guess in word_strategy(), answer in word_strategy()) {
        let pattern = Pattern::calculate(&guess, &answer);
        for i in 0..WORD_LENGTH {
            let same = guess.symbol_at(i) == answer.symbol_at(i);
            prop_assert_eq!(pattern.verdicts()[i] == Verdict::Correct, same);
        }
    }

    /// A word scored against itself is all correct
    #[test]
    fn self_score_is_perfect(word in word_strategy()) {
        prop_assert!(Pattern::calculate(&word, &word).is_perfect());
    }

    /// Scoring is pure
    #[test]
    fn scoring_is_deterministic(guess in word_strategy(), answer in word_strategy()) {
        prop_assert_eq!(
            Pattern::calculate(&guess, &answer),
            Pattern::calculate(&guess, &answer)
        );
    }

    /// Perfect only when the words are equal
    #[test]
    fn perfect_iff_equal(guess in word_strategy(), answer in word_strategy()) {
        prop_assert_eq!(Pattern::calculate(&guess, &answer).is_perfect(), guess == answer);
    }

    /// Key states never go down, and end at the best verdict seen
    #[test]
    fn key_states_are_monotonic(updates in prop::collection::vec(verdict_strategy(), 1..20)) {
        let symbol = Symbol::new("kw");
        let mut states = KeyStates::new();
        let mut previous: Option<Verdict> = None;

        for verdict in &updates {
            states.update(&symbol, *verdict);
            let current = states.best_state(&symbol);
            prop_assert!(current >= previous);
            previous = current;
        }

        prop_assert_eq!(previous, updates.iter().copied().max());
    }
}

#[test]
fn duplicate_example_from_two_pass_rule() {
    let guess = Word::new("ttak").unwrap();
    let answer = Word::new("taat").unwrap();
    assert_eq!(
        Pattern::calculate(&guess, &answer).verdicts(),
        &[
            Verdict::Correct,
            Verdict::Present,
            Verdict::Present,
            Verdict::Absent
        ]
    );
}

#[test]
fn correct_is_never_downgraded_by_later_rows() {
    let answer = Word::new("mato").unwrap();
    let mut states = KeyStates::new();

    for guess in ["mato", "tuhu", "puku"] {
        let guess = Word::new(guess).unwrap();
        states.record(&guess, Pattern::calculate(&guess, &answer));
    }

    assert_eq!(states.best_state(&Symbol::new("t")), Some(Verdict::Correct));
    assert_eq!(states.best_state(&Symbol::new("o")), Some(Verdict::Correct));
    assert_eq!(states.best_state(&Symbol::new("u")), Some(Verdict::Absent));
}
