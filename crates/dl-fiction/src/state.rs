//! Session lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a session ended without a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    /// Out of turns with a score below the passing mark.
    TurnsExhausted,
    /// The wall-clock budget ran out.
    TimeExhausted,
    /// The player gave up.
    Quit,
}

/// Where a session stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum GameState {
    /// Accepting commands.
    Running,
    /// The assignment was submitted.
    Won,
    /// The session ended without a submission.
    Lost(LossReason),
}

impl GameState {
    /// Whether no further input will be accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnsExhausted => write!(f, "ran out of turns"),
            Self::TimeExhausted => write!(f, "ran out of time"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Won => write!(f, "won"),
            Self::Lost(reason) => write!(f, "lost ({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_accepts_input() {
        assert!(!GameState::Running.is_terminal());
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost(LossReason::Quit).is_terminal());
    }

    #[test]
    fn serialises_with_reason() {
        let json = serde_json::to_string(&GameState::Lost(LossReason::TimeExhausted)).unwrap();
        assert_eq!(json, r#"{"state":"lost","reason":"time_exhausted"}"#);
        let json = serde_json::to_string(&GameState::Won).unwrap();
        assert_eq!(json, r#"{"state":"won"}"#);
    }
}
