use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of a location. Always positive in a validated world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LocationId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An item that can be carried around and deposited for points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, lowercase name. Doubles as the command that picks it up.
    pub name: String,
    /// Flavour text shown on pickup and in the inventory.
    pub description: String,
    /// Where the item starts.
    pub origin: LocationId,
    /// Where the item has to be dropped off.
    pub target: LocationId,
    /// Points credited when the item moves.
    pub points: i32,
}

impl Item {
    /// Create a new item.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        origin: LocationId,
        target: LocationId,
        points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            origin,
            target,
            points,
        }
    }
}

/// A node in the exit graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location identifier.
    pub id: LocationId,
    /// Short text shown on repeat visits.
    pub brief_description: String,
    /// Full text shown on the first visit and on `look`.
    pub long_description: String,
    /// Exit command name to destination.
    pub exits: BTreeMap<String, LocationId>,
    /// Items currently lying here, keyed by name.
    pub items: BTreeMap<String, Item>,
}

impl Location {
    /// Create a location with no exits and no items.
    pub fn new(
        id: LocationId,
        brief_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            brief_description: brief_description.into(),
            long_description: long_description.into(),
            exits: BTreeMap::new(),
            items: BTreeMap::new(),
        }
    }

    /// Builder-style exit registration.
    pub fn with_exit(mut self, command: impl Into<String>, destination: LocationId) -> Self {
        self.exits.insert(command.into(), destination);
        self
    }

    /// Destination of an exit command, if this location has it.
    pub fn exit(&self, command: &str) -> Option<LocationId> {
        self.exits.get(command).copied()
    }

    /// Exit command names in display order.
    pub fn exit_names(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Whether an item with this name is lying here.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Remove and return the named item.
    pub fn take_item(&mut self, name: &str) -> CoreResult<Item> {
        self.items
            .remove(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Remove and return whichever item comes first by name.
    ///
    /// This is the nameless form of [`Location::take_item`]. Which item it
    /// picks is unspecified by the game rules; prefer the named form.
    pub fn take_any_item(&mut self) -> CoreResult<Item> {
        self.items
            .pop_first()
            .map(|(_, item)| item)
            .ok_or_else(|| CoreError::ItemNotFound("<any>".to_string()))
    }

    /// Put an item here. Inserting the same name twice keeps one copy.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }
}
