//! Configuration for a play session.

use std::time::Duration;

use dl_core::LocationId;

use crate::challenge::{Gate, GateKind};

/// Undoing the pickup of `item` also hands `token` back.
///
/// Pairs with an [`GateKind::AccessToken`] gate, whose pickup consumed the
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRefund {
    /// The gated item whose pickup is undone.
    pub item: String,
    /// The token returned to the inventory.
    pub token: String,
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where the player starts.
    pub start_location: LocationId,
    /// Turns available at the start.
    pub turn_budget: u32,
    /// Wall-clock time available.
    pub time_budget: Duration,
    /// Score that keeps the game going after the turns run out.
    pub passing_score: i32,
    /// Where `submit` has to be played.
    pub home_location: LocationId,
    /// Items that must be carried or lying at home for `submit`.
    pub required_items: Vec<String>,
    /// Gated items.
    pub gates: Vec<Gate>,
    /// Replay mode: gates are skipped.
    pub simulation: bool,
    /// Token handed back when a token-gated pickup is undone.
    pub token_refund: Option<TokenRefund>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_location: LocationId(1),
            turn_budget: 25,
            time_budget: Duration::from_secs(600),
            passing_score: 70,
            home_location: LocationId(4),
            required_items: ["charger", "lucky mug", "usb drive"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            gates: vec![
                Gate::new(
                    "lucky mug",
                    LocationId(7),
                    GateKind::AccessToken {
                        token: "tcard".to_string(),
                    },
                ),
                Gate::new("charger", LocationId(3), GateKind::MatchingGame),
                Gate::new("usb drive", LocationId(6), GateKind::WordPuzzle),
            ],
            simulation: false,
            token_refund: Some(TokenRefund {
                item: "lucky mug".to_string(),
                token: "tcard".to_string(),
            }),
        }
    }
}

impl SessionConfig {
    /// Set the start location.
    pub fn with_start(mut self, location: LocationId) -> Self {
        self.start_location = location;
        self
    }

    /// Set the turn budget.
    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turn_budget = turns;
        self
    }

    /// Set the wall-clock budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Set the passing score.
    pub fn with_passing_score(mut self, score: i32) -> Self {
        self.passing_score = score;
        self
    }

    /// Set the home location and the items `submit` needs there.
    pub fn with_home(mut self, location: LocationId, required: &[&str]) -> Self {
        self.home_location = location;
        self.required_items = required.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the gates. Drops the token refund unless a token gate for the
    /// same item remains.
    pub fn with_gates(mut self, gates: Vec<Gate>) -> Self {
        let keep_refund = self.token_refund.as_ref().is_some_and(|refund| {
            gates.iter().any(|g| {
                g.item == refund.item
                    && matches!(&g.kind, GateKind::AccessToken { token } if *token == refund.token)
            })
        });
        if !keep_refund {
            self.token_refund = None;
        }
        self.gates = gates;
        self
    }

    /// Turn replay mode on or off.
    pub fn with_simulation(mut self, simulation: bool) -> Self {
        self.simulation = simulation;
        self
    }

    /// The gate for an item at a location, if any.
    pub fn gate_for(&self, item: &str, location: LocationId) -> Option<&Gate> {
        self.gates
            .iter()
            .find(|g| g.item == item && g.location == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.start_location, LocationId(1));
        assert_eq!(cfg.turn_budget, 25);
        assert_eq!(cfg.passing_score, 70);
        assert_eq!(cfg.time_budget, Duration::from_secs(600));
        assert_eq!(cfg.required_items.len(), 3);
        assert!(cfg.token_refund.is_some());
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_start(LocationId(2))
            .with_turns(10)
            .with_passing_score(5)
            .with_time_budget(Duration::from_secs(30))
            .with_home(LocationId(9), &["charger"])
            .with_simulation(true);
        assert_eq!(cfg.start_location, LocationId(2));
        assert_eq!(cfg.turn_budget, 10);
        assert_eq!(cfg.passing_score, 5);
        assert_eq!(cfg.home_location, LocationId(9));
        assert_eq!(cfg.required_items, vec!["charger"]);
        assert!(cfg.simulation);
    }

    #[test]
    fn gates_are_location_specific() {
        let cfg = SessionConfig::default();
        assert!(cfg.gate_for("charger", LocationId(3)).is_some());
        assert!(cfg.gate_for("charger", LocationId(4)).is_none());
        assert!(cfg.gate_for("tcard", LocationId(3)).is_none());
    }

    #[test]
    fn clearing_gates_drops_token_refund() {
        let cfg = SessionConfig::default().with_gates(Vec::new());
        assert!(cfg.gates.is_empty());
        assert!(cfg.token_refund.is_none());
    }
}
