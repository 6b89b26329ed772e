//! Game rules and session state
//!
//! Daily word selection, the on-screen keyboard and the submission state
//! machine. Front ends own a [`Session`] and feed it key presses.

pub mod config;
pub mod daily;
pub mod keyboard;
mod session;

pub use config::GameConfig;
pub use keyboard::{Key, KeyStates};
pub use session::{
    GameStatus, MAX_GUESSES, Rejection, Row, Session, SubmitOutcome, TITLE, WIN_MESSAGE,
};
