//! Error types for the minigames.

use thiserror::Error;

/// Result type for minigame operations.
pub type MinigameResult<T> = Result<T, MinigameError>;

/// Errors that can occur while playing a minigame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MinigameError {
    /// Input is not one of the three hands.
    #[error("'{0}' is not rock, paper or scissors")]
    InvalidHand(String),

    /// Guess is not a dictionary word of the right length.
    #[error("'{0}' is not a valid {1} letter word")]
    InvalidWord(String, usize),

    /// A word list has too few usable entries.
    #[error("word list needs at least {needed} words, found {found}")]
    NotEnoughWords {
        /// Words required.
        needed: usize,
        /// Words available.
        found: usize,
    },

    /// Input was given after the game finished.
    #[error("the game is already over")]
    GameOver,
}
