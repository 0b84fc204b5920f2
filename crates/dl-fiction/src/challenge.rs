//! Gated items and the challenge capability.
//!
//! Some items are only handed over after a side challenge. The engine knows
//! which items are gated and what each attempt costs in turns; how a
//! challenge is actually played is up to the [`ChallengeResolver`] the
//! session was built with.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use dl_core::LocationId;

/// How a gated item is won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Show (and hand over) another item first.
    AccessToken {
        /// Name of the item that is consumed.
        token: String,
    },
    /// Win a best-of-five matching game.
    MatchingGame,
    /// Solve a word guess, then an anagram round.
    WordPuzzle,
}

/// An item that needs a challenge before it can be picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// The gated item.
    pub item: String,
    /// Where the gate applies. Elsewhere the item is free to take.
    pub location: LocationId,
    /// What has to be done.
    pub kind: GateKind,
}

impl Gate {
    /// Create a gate.
    pub fn new(item: impl Into<String>, location: LocationId, kind: GateKind) -> Self {
        Self {
            item: item.into(),
            location,
            kind,
        }
    }
}

/// A challenge the resolver has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Item at stake.
    pub item: String,
    /// Which game to play.
    pub kind: GateKind,
}

/// What a challenge attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    /// Whether the item is handed over.
    pub granted: bool,
    /// Turns charged for the attempt.
    pub turns_cost: u32,
}

impl ChallengeOutcome {
    /// Item won at the given cost.
    pub fn granted(turns_cost: u32) -> Self {
        Self {
            granted: true,
            turns_cost,
        }
    }

    /// Item not won, at the given cost.
    pub fn failed(turns_cost: u32) -> Self {
        Self {
            granted: false,
            turns_cost,
        }
    }
}

/// Runs challenges. Blocks until the attempt is finished.
pub trait ChallengeResolver {
    /// Play the challenge and report the outcome.
    fn resolve(&mut self, challenge: &Challenge) -> ChallengeOutcome;
}

/// Resolver that grants everything for one turn. Used when no front end is
/// attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGrant;

impl ChallengeResolver for AlwaysGrant {
    fn resolve(&mut self, _challenge: &Challenge) -> ChallengeOutcome {
        ChallengeOutcome::granted(1)
    }
}

/// Resolver that replays a fixed list of outcomes and records what it was
/// asked. Falls back to a failure costing one turn once the list is used up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    outcomes: VecDeque<ChallengeOutcome>,
    seen: Vec<Challenge>,
}

impl ScriptedResolver {
    /// Create a resolver that answers with these outcomes in order.
    pub fn new(outcomes: impl IntoIterator<Item = ChallengeOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Challenges received so far.
    pub fn seen(&self) -> &[Challenge] {
        &self.seen
    }
}

impl ChallengeResolver for ScriptedResolver {
    fn resolve(&mut self, challenge: &Challenge) -> ChallengeOutcome {
        self.seen.push(challenge.clone());
        self.outcomes
            .pop_front()
            .unwrap_or(ChallengeOutcome::failed(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charger_challenge() -> Challenge {
        Challenge {
            item: "charger".to_string(),
            kind: GateKind::MatchingGame,
        }
    }

    #[test]
    fn scripted_outcomes_in_order() {
        let mut resolver =
            ScriptedResolver::new([ChallengeOutcome::failed(1), ChallengeOutcome::granted(1)]);
        assert!(!resolver.resolve(&charger_challenge()).granted);
        assert!(resolver.resolve(&charger_challenge()).granted);
        assert_eq!(
            resolver.resolve(&charger_challenge()),
            ChallengeOutcome::failed(1)
        );
        assert_eq!(resolver.seen().len(), 3);
    }

    #[test]
    fn always_grant() {
        let outcome = AlwaysGrant.resolve(&charger_challenge());
        assert_eq!(outcome, ChallengeOutcome::granted(1));
    }
}
