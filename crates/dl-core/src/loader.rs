//! JSON world files.
//!
//! The file lists locations with bare item names and a separate table of
//! item definitions. Loading resolves every location's item names into the
//! matching [`Item`] in a single pass, then validates the result.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{Item, Location, LocationId};
use crate::error::{CoreError, CoreResult};
use crate::world::World;

/// On-disk layout of a world file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldData {
    /// Location records.
    pub locations: Vec<LocationData>,
    /// Item definitions.
    pub items: Vec<ItemData>,
}

/// One location record as stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    /// Location identifier.
    pub id: u32,
    /// Short description.
    pub brief_description: String,
    /// Full description.
    pub long_description: String,
    /// Exit command to destination id.
    #[serde(default)]
    pub available_commands: BTreeMap<String, u32>,
    /// Names of the items initially lying here.
    #[serde(default)]
    pub items: Vec<String>,
}

/// One item definition as stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemData {
    /// Item name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Location the item starts at.
    pub start_position: u32,
    /// Location the item has to be dropped at.
    pub target_position: u32,
    /// Points for the item.
    pub target_points: i32,
}

impl World {
    /// Resolve and validate raw world data.
    ///
    /// Command and item names are normalised to lowercase so they match the
    /// lowercased player input.
    pub fn from_data(data: WorldData) -> CoreResult<Self> {
        let items: BTreeMap<String, Item> = data
            .items
            .into_iter()
            .map(|raw| {
                let name = normalise(&raw.name);
                let item = Item::new(
                    name.clone(),
                    raw.description,
                    LocationId(raw.start_position),
                    LocationId(raw.target_position),
                    raw.target_points,
                );
                (name, item)
            })
            .collect();

        let mut locations = Vec::with_capacity(data.locations.len());
        for raw in data.locations {
            let mut location = Location::new(
                LocationId(raw.id),
                raw.brief_description,
                raw.long_description,
            );
            for (command, destination) in raw.available_commands {
                location
                    .exits
                    .insert(normalise(&command), LocationId(destination));
            }
            for name in raw.items {
                let name = normalise(&name);
                let item = items
                    .get(&name)
                    .cloned()
                    .ok_or(CoreError::ItemNotFound(name))?;
                location.add_item(item);
            }
            locations.push(location);
        }

        let world = World::new(locations, items.into_values().collect())?;
        debug!(
            locations = world.location_count(),
            items = world.item_count(),
            "world loaded"
        );
        Ok(world)
    }

    /// Parse a world from a JSON string.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let data: WorldData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Read and parse a world file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase()
}
