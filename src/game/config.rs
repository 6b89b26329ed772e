//! Game configuration
//!
//! Everything that can vary between runs. Built from command line arguments;
//! nothing is read from or written to disk besides an optional word list.

use super::daily::{self, EPOCH};
use super::session::TITLE;
use crate::core::Word;
use crate::wordlists::{Dictionary, WordlistSource};
use chrono::NaiveDate;
use rand::prelude::IndexedRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Title used in share text
    pub title: String,
    /// First day of the word cycle
    pub epoch: NaiveDate,
    /// Day whose word is played
    pub date: NaiveDate,
    /// Where words come from
    pub wordlist: WordlistSource,
    /// Pick a random secret instead of the daily one
    pub practice: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            epoch: EPOCH,
            date: daily::today(),
            wordlist: WordlistSource::Embedded,
            practice: false,
        }
    }
}

impl GameConfig {
    /// Index of the daily word for the configured date
    #[must_use]
    pub fn daily_index(&self, dictionary: &Dictionary) -> Option<usize> {
        (!dictionary.is_empty())
            .then(|| daily::daily_index(self.epoch, self.date, dictionary.len()))
    }

    /// Secret for a new game: the daily word, or a random one in practice mode
    #[must_use]
    pub fn choose_secret<'d>(&self, dictionary: &'d Dictionary) -> Option<&'d Word> {
        if self.practice {
            dictionary.words().choose(&mut rand::rng())
        } else {
            daily::daily_word(dictionary, self.epoch, self.date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn config_for(date: &str) -> GameConfig {
        GameConfig {
            date: daily::parse_date(date).unwrap(),
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.title, "Comanche Word Game");
        assert_eq!(config.epoch, EPOCH);
        assert_eq!(config.wordlist, WordlistSource::Embedded);
        assert!(!config.practice);
    }

    #[test]
    fn daily_secret_follows_date() {
        let dictionary = Dictionary::new(words_from_slice(&["puku", "mato", "tuhu"]));

        let config = config_for("2024-01-02");
        assert_eq!(config.daily_index(&dictionary), Some(1));
        assert_eq!(config.choose_secret(&dictionary).map(Word::text), Some("mato"));
    }

    #[test]
    fn practice_secret_comes_from_dictionary() {
        let dictionary = Dictionary::embedded();
        let config = GameConfig {
            practice: true,
            ..GameConfig::default()
        };

        for _ in 0..20 {
            let secret = config.choose_secret(&dictionary).unwrap();
            assert!(dictionary.contains(secret));
        }
    }

    #[test]
    fn empty_dictionary_has_no_secret() {
        let dictionary = Dictionary::new(Vec::new());
        let config = GameConfig::default();
        assert_eq!(config.daily_index(&dictionary), None);
        assert!(config.choose_secret(&dictionary).is_none());
    }
}
