//! Ember Core - In-memory game state
//!
//! This crate provides the authoritative state shared with the scripting layer:
//! - `Player` with a bounded, ordered inventory
//! - `Enemy` and `Chest` entities owned by scripts
//! - `ItemDescriptor` and the `ItemCatalog` lookup seam
//! - `SaveRecord`, the persisted slice of player progress
//!
//! Storage lives behind `ItemCatalog` so this crate never touches the database.

mod entity;
mod item;
mod player;
mod save;

pub use entity::{Chest, Enemy};
pub use item::{ItemCatalog, ItemDescriptor, ItemId, UNKNOWN_ITEM};
pub use player::{AddItemOutcome, Player, INVENTORY_CAPACITY};
pub use save::SaveRecord;
