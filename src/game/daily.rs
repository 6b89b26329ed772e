//! Daily secret selection
//!
//! The secret for a day is the word at index
//! `days_since_epoch(date) mod list_len`, so every player sees the same word
//! on the same calendar day and the list repeats once it is exhausted.

use crate::core::Word;
use crate::wordlists::Dictionary;
use chrono::{Local, NaiveDate};
use thiserror::Error;

/// First day of the word cycle
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `DateError::Invalid` when the text is not a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::Invalid(text.to_string()))
}

/// Today's date in the local time zone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `epoch` to `date`; negative before the epoch
#[must_use]
pub fn days_since(epoch: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Index of the secret word for `date` in a list of `len` words
///
/// Dates before the epoch wrap around the end of the list.
///
/// # Panics
/// Panics if `len` is zero.
#[must_use]
pub fn daily_index(epoch: NaiveDate, date: NaiveDate, len: usize) -> usize {
    assert!(len > 0, "word list must not be empty");
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    // rem_euclid of a positive modulus is in 0..len
    days_since(epoch, date).rem_euclid(len) as usize
}

/// The secret word for `date`
///
/// Returns `None` only for an empty dictionary.
#[must_use]
pub fn daily_word(dictionary: &Dictionary, epoch: NaiveDate, date: NaiveDate) -> Option<&Word> {
    if dictionary.is_empty() {
        return None;
    }
    let index = daily_index(epoch, date, dictionary.len());
    tracing::debug!(%date, index, "selected daily word");
    dictionary.get(index)
}
