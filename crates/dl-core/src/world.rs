use std::collections::{BTreeMap, BTreeSet};

use crate::entity::{Item, Location, LocationId};
use crate::error::{CoreError, CoreResult};

/// The game world: every location and every item, indexed for lookup.
///
/// Topology is frozen after construction. The only mutation is moving items
/// in and out of a location's item set through [`World::location_mut`].
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
    items: BTreeMap<String, Item>,
}

impl World {
    /// Build a world from already-resolved locations and items and validate it.
    pub fn new(locations: Vec<Location>, items: Vec<Item>) -> CoreResult<Self> {
        let mut world = Self::default();

        for item in items {
            if world.items.contains_key(&item.name) {
                return Err(CoreError::Validation(format!(
                    "duplicate item name \"{}\"",
                    item.name
                )));
            }
            world.items.insert(item.name.clone(), item);
        }

        for location in locations {
            if world.locations.contains_key(&location.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate location id {}",
                    location.id
                )));
            }
            world.locations.insert(location.id, location);
        }

        world.validate()?;
        Ok(world)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a location by ID.
    pub fn location(&self, id: LocationId) -> CoreResult<&Location> {
        self.locations
            .get(&id)
            .ok_or(CoreError::LocationNotFound(id))
    }

    /// Get a mutable location by ID, for moving items around.
    pub fn location_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or(CoreError::LocationNotFound(id))
    }

    /// Get an item definition by name.
    pub fn item(&self, name: &str) -> CoreResult<&Item> {
        self.items
            .get(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// All locations in ID order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All item definitions in name order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of item definitions.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check every structural invariant of the world.
    ///
    /// Loaded data that passes here can be played without any lookup ever
    /// failing.
    pub fn validate(&self) -> CoreResult<()> {
        for (id, location) in &self.locations {
            if id.0 == 0 {
                return Err(CoreError::Validation(
                    "location ids must be positive".to_string(),
                ));
            }
            if location.id != *id {
                return Err(CoreError::Validation(format!(
                    "location {} is indexed under id {id}",
                    location.id
                )));
            }

            for (command, destination) in &location.exits {
                if !self.locations.contains_key(destination) {
                    return Err(CoreError::Validation(format!(
                        "exit \"{command}\" of location {id} leads to unknown location {destination}"
                    )));
                }
                if location.items.contains_key(command) {
                    return Err(CoreError::Validation(format!(
                        "exit \"{command}\" of location {id} has the same name as an item there"
                    )));
                }
            }

            for (name, item) in &location.items {
                match self.items.get(name) {
                    Some(known) if known == item => {}
                    Some(_) => {
                        return Err(CoreError::Validation(format!(
                            "item \"{name}\" at location {id} differs from its definition"
                        )));
                    }
                    None => {
                        return Err(CoreError::Validation(format!(
                            "location {id} lists unknown item \"{name}\""
                        )));
                    }
                }
            }
        }

        let mut placed = BTreeSet::new();
        for location in self.locations.values() {
            for name in location.items.keys() {
                if !placed.insert(name.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "item \"{name}\" is placed at more than one location"
                    )));
                }
            }
        }

        for item in self.items.values() {
            if item.origin == item.target {
                return Err(CoreError::Validation(format!(
                    "item \"{}\" starts where it has to be dropped off",
                    item.name
                )));
            }
            for (role, id) in [("origin", item.origin), ("target", item.target)] {
                if !self.locations.contains_key(&id) {
                    return Err(CoreError::Validation(format!(
                        "{role} of item \"{}\" is unknown location {id}",
                        item.name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_rooms() -> (Vec<Location>, Vec<Item>) {
        let charger = Item::new("charger", "A charger.", LocationId(1), LocationId(2), 10);
        let mut hall = Location::new(LocationId(1), "Hall.", "A long hall.")
            .with_exit("north", LocationId(2));
        hall.add_item(charger.clone());
        let dorm = Location::new(LocationId(2), "Dorm.", "Your dorm room.")
            .with_exit("south", LocationId(1));
        (vec![hall, dorm], vec![charger])
    }

    #[test]
    fn lookup_location_and_item() {
        let (locations, items) = two_rooms();
        let world = World::new(locations, items).unwrap();

        assert_eq!(world.location(LocationId(2)).unwrap().brief_description, "Dorm.");
        assert_eq!(world.item("charger").unwrap().points, 10);
        assert_eq!(world.location_count(), 2);
        assert_eq!(world.item_count(), 1);
    }

    #[test]
    fn missing_lookups_are_not_found() {
        let (locations, items) = two_rooms();
        let world = World::new(locations, items).unwrap();

        assert!(world.location(LocationId(9)).unwrap_err().is_not_found());
        assert!(world.item("usb drive").unwrap_err().is_not_found());
    }

    #[test]
    fn dangling_exit_rejected() {
        let (mut locations, items) = two_rooms();
        locations[0].exits.insert("east".to_string(), LocationId(7));
        assert!(matches!(
            World::new(locations, items),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn zero_id_rejected() {
        let locations = vec![Location::new(LocationId(0), "Void.", "Nothing.")];
        assert!(World::new(locations, Vec::new()).is_err());
    }

    #[test]
    fn exit_shadowed_by_item_rejected() {
        let (mut locations, items) = two_rooms();
        locations[0]
            .exits
            .insert("charger".to_string(), LocationId(2));
        assert!(World::new(locations, items).is_err());
    }

    #[test]
    fn item_with_same_origin_and_target_rejected() {
        let (locations, mut items) = two_rooms();
        items[0].target = items[0].origin;
        assert!(World::new(locations, items).is_err());
    }

    #[test]
    fn duplicate_location_rejected() {
        let (mut locations, items) = two_rooms();
        locations.push(Location::new(LocationId(2), "Again.", "Again."));
        assert!(World::new(locations, items).is_err());
    }

    fn ring(size: u32) -> Vec<Location> {
        (1..=size)
            .map(|i| {
                let next = if i == size { 1 } else { i + 1 };
                let prev = if i == 1 { size } else { i - 1 };
                Location::new(LocationId(i), format!("Room {i}."), format!("Room number {i}."))
                    .with_exit("forward", LocationId(next))
                    .with_exit("back", LocationId(prev))
            })
            .collect()
    }

    proptest! {
        #[test]
        fn every_exit_resolves(size in 1u32..40) {
            let world = World::new(ring(size), Vec::new()).unwrap();
            for location in world.locations() {
                for destination in location.exits.values() {
                    prop_assert!(world.location(*destination).is_ok());
                }
            }
        }

        #[test]
        fn out_of_range_exit_never_validates(size in 1u32..40, extra in 1u32..100) {
            let mut locations = ring(size);
            locations[0].exits.insert("jump".to_string(), LocationId(size + extra));
            prop_assert!(World::new(locations, Vec::new()).is_err());
        }
    }
}
