//! Command implementations

pub mod analyze;
pub mod daily;
pub mod score;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_word};
pub use daily::{DailyResult, daily_word_for};
pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
