//! Error types for the fiction engine.

use thiserror::Error;

use dl_core::{CoreError, LocationId};

use crate::state::GameState;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// A recognised command that cannot be carried out right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// `drop` with nothing carried.
    #[error("Your inventory is empty.")]
    EmptyInventory,

    /// `drop` without naming an item.
    #[error("Drop what?")]
    DropWhat,

    /// Named item is not in the inventory.
    #[error("The {0} is not in your inventory.")]
    NotCarrying(String),

    /// Item belongs somewhere else.
    #[error("Don't drop the {item} here! It belongs at location {target}.")]
    WrongDropLocation {
        /// The item.
        item: String,
        /// Where it has to go.
        target: LocationId,
    },

    /// Named item is not lying here.
    #[error("There is no {0} here.")]
    NotHere(String),

    /// Submit away from home or without every required item.
    #[error("You need to be at location {home} with your {} to submit!", .required.join(", "))]
    CannotSubmit {
        /// The home location.
        home: LocationId,
        /// Items that must be there.
        required: Vec<String>,
    },

    /// Undo before any command was played.
    #[error("You can't undo on turn 1!")]
    NothingToUndo,

    /// Undo straight after an undo.
    #[error("You can't undo an undo command!")]
    UndoUndo,

    /// The last command did not change anything worth reverting.
    #[error("Last action did not change the game state.")]
    NoStateChange,
}

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Input is not a menu action, visible item, or exit here.
    #[error("That was an invalid option: '{input}'.{}", did_you_mean(.suggestion))]
    InvalidCommand {
        /// The normalised input.
        input: String,
        /// Closest valid command, if one is close enough.
        suggestion: Option<String>,
    },

    /// Recognised command that is not allowed in the current state.
    #[error(transparent)]
    IllegalAction(#[from] IllegalAction),

    /// A gated item was not won. The turn cost has been charged.
    #[error("You didn't get the {item}. ({turns_cost} turn(s) spent)")]
    ChallengeFailure {
        /// The gated item.
        item: String,
        /// Turns charged for the attempt.
        turns_cost: u32,
    },

    /// The session already ended.
    #[error("the game is over: {0}")]
    GameOver(GameState),

    /// World lookup failed. Indicates inconsistent world data.
    #[error(transparent)]
    World(#[from] CoreError),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" Did you mean '{s}'?"))
        .unwrap_or_default()
}

impl FictionError {
    /// Whether the player can simply try again with different input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::GameOver(_) | Self::World(_))
    }
}
