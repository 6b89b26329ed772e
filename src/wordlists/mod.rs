//! Word lists for the game
//!
//! Provides the embedded daily list compiled into the binary and the
//! [`Dictionary`] used both for picking secrets and for validating guesses.

mod embedded;
pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

pub use embedded::{DAILY_WORDS, DAILY_WORDS_COUNT};

/// Ordered list of valid words with fast membership lookup
///
/// Order matters: the daily secret is picked by index.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words, keeping the first of any duplicates
    ///
    /// Dropped duplicates shift the daily index of every later word, so each
    /// one is logged.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .enumerate()
            .filter_map(|(position, word)| {
                if lookup.insert(word.clone()) {
                    Some(word)
                } else {
                    tracing::warn!(word = %word, position, "skipping duplicate word list entry");
                    None
                }
            })
            .collect();
        Self { words, lookup }
    }

    /// The embedded daily word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(DAILY_WORDS))
    }

    /// Check if a word is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Words in list order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a list index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl FromStr for WordlistSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("word list source must not be empty".to_string()),
            "embedded" | "default" => Ok(Self::Embedded),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl WordlistSource {
    /// Load the dictionary for this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or `InvalidData` if it
    /// holds no usable words.
    pub fn load(&self) -> io::Result<Dictionary> {
        let dictionary = match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::new(loader::load_from_file(path)?),
        };

        if dictionary.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word list contains no four-symbol words",
            ));
        }

        tracing::info!(source = ?self, words = dictionary.len(), "dictionary ready");
        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn daily_words_count_matches_const() {
        assert_eq!(DAILY_WORDS.len(), DAILY_WORDS_COUNT);
    }

    #[test]
    fn daily_words_all_tokenize_to_word_length() {
        for &word in DAILY_WORDS {
            let parsed = Word::new(word);
            assert!(parsed.is_ok(), "Word '{word}' is not {WORD_LENGTH} symbols");
        }
    }

    #[test]
    fn daily_words_are_lowercase() {
        for &word in DAILY_WORDS {
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }

    #[test]
    fn embedded_dictionary_keeps_every_word() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), DAILY_WORDS_COUNT);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn dictionary_contains_normalized_words() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.contains(&Word::new("mato").unwrap()));
        assert!(dictionary.contains(&Word::new("MATO").unwrap()));
        assert!(!dictionary.contains(&Word::new("zzzz").unwrap()));
    }

    #[test]
    fn dictionary_drops_duplicates_keeping_order() {
        let words = loader::words_from_slice(&["puku", "mato", "puku", "tuhu"]);
        let dictionary = Dictionary::new(words);

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["puku", "mato", "tuhu"]);
        assert_eq!(dictionary.get(1).map(Word::text), Some("mato"));
        assert!(dictionary.get(3).is_none());
    }

    #[test]
    fn duplicate_entries_do_not_take_a_day() {
        use crate::game::daily::{EPOCH, daily_word};

        let dictionary = Dictionary::new(loader::words_from_slice(&["puku", "puku", "mato"]));
        let next_day = EPOCH.succ_opt().unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(daily_word(&dictionary, EPOCH, next_day).map(Word::text), Some("mato"));
    }

    #[test]
    fn wordlist_source_parsing() {
        assert_eq!(
            "embedded".parse::<WordlistSource>(),
            Ok(WordlistSource::Embedded)
        );
        assert_eq!(
            "words/custom.txt".parse::<WordlistSource>(),
            Ok(WordlistSource::File(PathBuf::from("words/custom.txt")))
        );
        assert!("  ".parse::<WordlistSource>().is_err());
    }

    #[test]
    fn embedded_source_loads() {
        let dictionary = WordlistSource::Embedded.load().unwrap();
        assert_eq!(dictionary.len(), DAILY_WORDS_COUNT);
    }

    #[test]
    fn missing_file_source_errors() {
        let source = WordlistSource::File(PathBuf::from("/no/such/list.txt"));
        assert!(source.load().is_err());
    }
}
