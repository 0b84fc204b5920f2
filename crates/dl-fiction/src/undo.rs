//! Single-level undo.
//!
//! Every accepted command leaves a [`PendingUndo`] describing how to revert
//! it. Only the most recent one is kept, so there is exactly one level of
//! undo and an undo can never be undone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dl_core::{LocationId, World};

use crate::config::TokenRefund;
use crate::error::{FictionResult, IllegalAction};
use crate::event_log::EventLog;
use crate::player::PlayerState;

/// How to revert the previous command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "effect")]
pub enum PendingUndo {
    /// Nothing has been played yet.
    #[default]
    Start,
    /// The player followed an exit.
    Moved {
        /// Where the move started.
        from: LocationId,
        /// Exit that was taken.
        exit: String,
        /// Turns actually charged for the move.
        turns_spent: u32,
    },
    /// The player picked an item up.
    PickedUp {
        /// The item.
        item: String,
        /// Where it was lying.
        location: LocationId,
        /// Points credited for it.
        points: i32,
        /// Token handed over to get the item, if any.
        token_spent: Option<String>,
    },
    /// The player dropped an item at its target.
    Deposited {
        /// The item.
        item: String,
        /// Where it was left.
        location: LocationId,
        /// Points credited for it.
        points: i32,
    },
    /// The previous command was itself an undo.
    Undone,
    /// The previous command changed nothing that can be reverted.
    Other,
}

/// Everything an undo may touch.
pub(crate) struct UndoTarget<'a> {
    pub world: &'a mut World,
    pub player: &'a mut PlayerState,
    pub log: &'a mut EventLog,
    pub refund: Option<&'a TokenRefund>,
}

/// Revert the effect described by `pending`.
///
/// All checks run before anything is changed, so a rejected undo leaves
/// the session untouched.
pub(crate) fn apply(pending: &PendingUndo, target: UndoTarget<'_>) -> FictionResult<String> {
    let UndoTarget {
        world,
        player,
        log,
        refund,
    } = target;

    match pending {
        PendingUndo::Start => Err(IllegalAction::NothingToUndo.into()),
        PendingUndo::Undone => Err(IllegalAction::UndoUndo.into()),
        PendingUndo::Other => Err(IllegalAction::NoStateChange.into()),

        PendingUndo::Moved {
            from,
            exit,
            turns_spent,
        } => {
            if world.location(*from)?.exit(exit).is_none() {
                return Err(IllegalAction::NoStateChange.into());
            }
            log.remove_last();
            player.location = *from;
            player.turns_remaining += *turns_spent;
            debug!(location = %from, "undo move");
            Ok(format!("You head back the way you came ({exit})."))
        }

        PendingUndo::PickedUp {
            item,
            location,
            points,
            token_spent,
        } => {
            if !player.holds(item) {
                return Err(IllegalAction::NoStateChange.into());
            }
            let token = match refund {
                Some(rule) => restore_access_token(world, rule, item, token_spent.as_deref())?,
                None => None,
            };
            let place = world.location_mut(*location)?;
            let Some(taken) = player.remove_item(item) else {
                return Err(IllegalAction::NoStateChange.into());
            };
            place.add_item(taken);
            player.score -= points;
            let mut message = format!("You put the {item} back.");
            if let Some(token) = token {
                message.push_str(&format!(" You get your {} back.", token.name));
                player.add_item(token);
            }
            debug!(%item, points, "undo pickup");
            Ok(message)
        }

        PendingUndo::Deposited {
            item,
            location,
            points,
        } => {
            let place = world.location_mut(*location)?;
            if !place.has_item(item) {
                return Err(IllegalAction::NoStateChange.into());
            }
            let taken = place.take_item(item)?;
            player.add_item(taken);
            player.score -= points;
            debug!(%item, points, "undo drop");
            Ok(format!("You pick the {item} back up."))
        }
    }
}

/// Undoing the pickup of the token-gated item returns the token that was
/// handed over for it. Nothing comes back when the pickup spent no token
/// (simulation mode, or a pickup away from the gate).
fn restore_access_token(
    world: &World,
    rule: &TokenRefund,
    undone_item: &str,
    token_spent: Option<&str>,
) -> FictionResult<Option<dl_core::Item>> {
    if rule.item != undone_item || token_spent != Some(rule.token.as_str()) {
        return Ok(None);
    }
    Ok(Some(world.item(&rule.token)?.clone()))
}
