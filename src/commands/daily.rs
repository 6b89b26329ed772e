//! Daily word command
//!
//! Reports which word of the list belongs to a given day.

use crate::game::GameConfig;
use crate::game::daily::days_since;
use crate::wordlists::Dictionary;
use chrono::NaiveDate;

/// Result of looking up a day
pub struct DailyResult {
    pub date: NaiveDate,
    /// Days since the epoch, negative before it
    pub day_number: i64,
    pub index: usize,
    pub list_len: usize,
    pub word: String,
}

/// Look up the daily word for the configured date
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn daily_word_for(config: &GameConfig, dictionary: &Dictionary) -> Result<DailyResult, String> {
    let index = config
        .daily_index(dictionary)
        .ok_or_else(|| "Word list is empty".to_string())?;
    let word = dictionary
        .get(index)
        .ok_or_else(|| format!("No word at index {index}"))?;

    Ok(DailyResult {
        date: config.date,
        day_number: days_since(config.epoch, config.date),
        index,
        list_len: dictionary.len(),
        word: word.text().to_string(),
    })
}
