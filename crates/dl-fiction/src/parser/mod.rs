//! Command classification and suggestions.

mod command;
mod suggest;

pub use command::{Classified, Command, MenuAction, classify, normalise};
pub use suggest::{suggest_command, valid_commands};
