//! Side-quest minigames for Deadline.
//!
//! Each game is a small state machine driven one input at a time, so the
//! terminal front end owns all prompting and the games stay testable with a
//! seeded RNG.

pub mod anagram;
pub mod config;
pub mod error;
pub mod matching;
pub mod word_guess;

pub use anagram::AnagramRound;
pub use config::MinigameConfig;
pub use error::{MinigameError, MinigameResult};
pub use matching::{Hand, MatchingGame, RoundResult};
pub use word_guess::{LetterFeedback, WordGuess};
