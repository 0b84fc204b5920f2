//! World model for Deadline: locations, items, and the JSON world loader.
//!
//! A [`World`] is built once (usually with [`World::load`]) and its exit graph
//! never changes afterwards. The fiction engine moves items between location
//! item sets and the player's inventory, nothing else.

/// Location and item types.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// JSON world file format and loading.
pub mod loader;
/// The world container and its validation rules.
pub mod world;

/// Re-export entity types.
pub use entity::{Item, Location, LocationId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the file format.
pub use loader::WorldData;
/// Re-export the world model.
pub use world::World;
