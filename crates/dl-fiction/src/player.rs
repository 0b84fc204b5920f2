//! Player state management.

use std::collections::BTreeSet;

use dl_core::{Item, Location, LocationId};

use crate::error::{FictionResult, IllegalAction};

/// The player's mutable session state.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Items carried, in pickup order, no duplicate names.
    inventory: Vec<Item>,
    /// Points so far. Only an undo can push this below zero.
    pub score: i32,
    /// Turns left before the turn budget check kicks in.
    pub turns_remaining: u32,
    /// Locations already described in full.
    visited: BTreeSet<LocationId>,
    /// Automated replay: gated items are handed over without a challenge.
    pub simulation: bool,
}

impl PlayerState {
    /// Create a new player at the given location.
    pub fn new(location: LocationId, turns: u32) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            score: 0,
            turns_remaining: turns,
            visited: BTreeSet::new(),
            simulation: false,
        }
    }

    /// Items carried, in pickup order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Names of the carried items.
    pub fn held_names(&self) -> Vec<&str> {
        self.inventory.iter().map(|i| i.name.as_str()).collect()
    }

    /// Check if the player carries an item.
    pub fn holds(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.name == name)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        if !self.holds(&item.name) {
            self.inventory.push(item);
        }
    }

    /// Remove an item from the inventory.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.inventory.iter().position(|i| i.name == name)?;
        Some(self.inventory.remove(pos))
    }

    /// Mark a location as seen. Returns true the first time.
    pub fn visit(&mut self, location: LocationId) -> bool {
        self.visited.insert(location)
    }

    /// Whether a location was already seen.
    pub fn has_visited(&self, location: LocationId) -> bool {
        self.visited.contains(&location)
    }

    /// Spend turns, never going below zero.
    pub fn spend_turns(&mut self, turns: u32) {
        self.turns_remaining = self.turns_remaining.saturating_sub(turns);
    }

    /// Move a visible item from the location into the inventory and credit
    /// its points. Returns the credited points.
    pub fn pickup(&mut self, location: &mut Location, name: &str) -> FictionResult<i32> {
        if !location.has_item(name) {
            return Err(IllegalAction::NotHere(name.to_string()).into());
        }
        let item = location.take_item(name)?;
        let points = item.points;
        self.add_item(item);
        self.score += points;
        Ok(points)
    }

    /// Leave a carried item at its target location and credit its points.
    /// Returns the credited points.
    pub fn deposit(&mut self, location: &mut Location, name: &str) -> FictionResult<i32> {
        let Some(item) = self.inventory.iter().find(|i| i.name == name) else {
            return Err(IllegalAction::NotCarrying(name.to_string()).into());
        };
        if item.target != location.id {
            return Err(IllegalAction::WrongDropLocation {
                item: name.to_string(),
                target: item.target,
            }
            .into());
        }

        let item = self.remove_item(name).ok_or_else(|| {
            IllegalAction::NotCarrying(name.to_string())
        })?;
        let points = item.points;
        location.add_item(item);
        self.score += points;
        Ok(points)
    }
}
