//! Classification of player input.

use std::fmt;

use serde::{Deserialize, Serialize};

use dl_core::Location;

/// Commands available at every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Show the long description again.
    Look,
    /// List carried items.
    Inventory,
    /// Show the score.
    Score,
    /// Revert the previous command.
    Undo,
    /// Show the turn history.
    Log,
    /// Give up.
    Quit,
    /// Leave a carried item at its target.
    Drop,
    /// Try to win.
    Submit,
}

impl MenuAction {
    /// Every menu action, in the order they are shown to the player.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::Look,
        MenuAction::Inventory,
        MenuAction::Score,
        MenuAction::Undo,
        MenuAction::Log,
        MenuAction::Quit,
        MenuAction::Drop,
        MenuAction::Submit,
    ];

    /// Parse a menu action from normalised input.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == s)
    }

    /// The word the player types.
    pub fn name(self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Score => "score",
            Self::Undo => "undo",
            Self::Log => "log",
            Self::Quit => "quit",
            Self::Drop => "drop",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a line of input means at the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// A global menu action.
    Menu(MenuAction),
    /// An item lying here.
    Item(String),
    /// An exit from here.
    Exit(String),
    /// Nothing recognisable. Holds the normalised input.
    Invalid(String),
}

/// Trim and lowercase raw input.
pub fn normalise(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Classify input against the current location.
///
/// Menu actions win over items, and items win over exits, so an exit that
/// shares a name with either is unreachable.
pub fn classify(input: &str, location: &Location) -> Classified {
    let input = normalise(input);

    if let Some(action) = MenuAction::parse(&input) {
        return Classified::Menu(action);
    }
    if location.has_item(&input) {
        return Classified::Item(input);
    }
    if location.exit(&input).is_some() {
        return Classified::Exit(input);
    }

    Classified::Invalid(input)
}

/// A fully resolved command, ready for the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Command {
    /// A menu action other than `drop`.
    Menu(MenuAction),
    /// Drop a named item.
    Drop(String),
    /// Pick up a visible item.
    Take(String),
    /// Follow an exit.
    Go(String),
}

impl Command {
    /// The text this command is recorded under in the event log.
    pub fn label(&self) -> String {
        match self {
            Self::Menu(action) => action.name().to_string(),
            Self::Drop(_) => MenuAction::Drop.name().to_string(),
            Self::Take(name) | Self::Go(name) => name.clone(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop(item) => write!(f, "drop {item}"),
            other => f.write_str(&other.label()),
        }
    }
}
