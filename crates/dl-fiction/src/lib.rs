//! Turn engine for Deadline.
//!
//! A [`GameSession`] takes one line of player input per turn, classifies it
//! against the current location, applies it to the world and the player, and
//! checks whether the game is won or lost. Every state-changing command can
//! be reverted once with `undo`. Gated items go through a
//! [`ChallengeResolver`] supplied by the front end.

/// Gated items and the challenge capability.
pub mod challenge;
/// Wall-clock sources.
pub mod clock;
/// Session configuration.
pub mod config;
/// Error types for the turn engine.
pub mod error;
/// Record of accepted turns.
pub mod event_log;
/// Command classification and suggestions.
pub mod parser;
/// Player state.
pub mod player;
/// The turn engine.
pub mod session;
/// Session state and loss reasons.
pub mod state;
/// Single-level undo.
pub mod undo;

pub use challenge::{
    AlwaysGrant, Challenge, ChallengeOutcome, ChallengeResolver, Gate, GateKind, ScriptedResolver,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{SessionConfig, TokenRefund};
pub use error::{FictionError, FictionResult, IllegalAction};
pub use event_log::{EventLog, LogEntry};
pub use parser::{Classified, Command, MenuAction};
pub use player::PlayerState;
pub use session::{GameSession, SceneView, SessionSummary, TurnReport};
pub use state::{GameState, LossReason};
pub use undo::PendingUndo;
