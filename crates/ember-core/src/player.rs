//! The player and its inventory

use crate::item::{ItemCatalog, ItemId, UNKNOWN_ITEM};
use serde::{Deserialize, Serialize};

/// Maximum number of items a player can carry
pub const INVENTORY_CAPACITY: usize = 5;

/// Result of trying to pick up an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddItemOutcome {
    /// Item appended to the inventory
    Added { name: String },
    /// Inventory already holds `INVENTORY_CAPACITY` items
    InventoryFull,
    /// The catalog does not know this id
    NotInCatalog,
}

impl AddItemOutcome {
    /// Whether the item ended up in the inventory
    pub fn is_added(&self) -> bool {
        matches!(self, AddItemOutcome::Added { .. })
    }

    /// Human-readable description, suitable for the game console
    pub fn message(&self, id: ItemId) -> String {
        match self {
            AddItemOutcome::Added { name } => format!("Picked up: {}", name),
            AddItemOutcome::InventoryFull => "Inventory is full.".to_string(),
            AddItemOutcome::NotInCatalog => format!("Item {} not in catalog.", id),
        }
    }
}

/// The single player of a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Hit points
    pub hp: i64,
    /// Equipped weapon category
    pub weapon_type: i64,
    /// Identifier of the current weapon, empty when none
    pub current_weapon_id: String,
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
    /// Held item ids in pickup order
    inventory: Vec<ItemId>,
}

impl Player {
    /// Create a player with starting stats
    pub fn new() -> Self {
        Self {
            hp: 20,
            weapon_type: 0,
            current_weapon_id: String::new(),
            x: 1,
            y: 1,
            inventory: Vec::with_capacity(INVENTORY_CAPACITY),
        }
    }

    /// Held item ids in pickup order
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Whether another item would be rejected for capacity
    pub fn is_inventory_full(&self) -> bool {
        self.inventory.len() >= INVENTORY_CAPACITY
    }

    /// Pick up an item.
    ///
    /// Capacity is checked before the catalog is consulted. The inventory is
    /// only modified on `AddItemOutcome::Added`.
    pub fn add_item<C: ItemCatalog>(
        &mut self,
        id: ItemId,
        catalog: &C,
    ) -> Result<AddItemOutcome, C::Error> {
        if self.is_inventory_full() {
            return Ok(AddItemOutcome::InventoryFull);
        }

        let name = catalog.name_of(id)?;
        if name == UNKNOWN_ITEM {
            return Ok(AddItemOutcome::NotInCatalog);
        }

        self.inventory.push(id);
        Ok(AddItemOutcome::Added { name })
    }

    /// Look up an item's name, whether or not it is held
    pub fn inspect_item<C: ItemCatalog>(
        &self,
        id: ItemId,
        catalog: &C,
    ) -> Result<String, C::Error> {
        catalog.name_of(id)
    }

    /// Held items paired with their current catalog names
    pub fn list_inventory<C: ItemCatalog>(
        &self,
        catalog: &C,
    ) -> Result<Vec<(ItemId, String)>, C::Error> {
        self.inventory
            .iter()
            .map(|&id| catalog.name_of(id).map(|name| (id, name)))
            .collect()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemDescriptor;
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::convert::Infallible;

    fn swords() -> BTreeMap<ItemId, ItemDescriptor> {
        [
            ItemDescriptor::new(101, "Wooden Sword", 2),
            ItemDescriptor::new(102, "Iron Sword", 5),
            ItemDescriptor::new(103, "Steel Sword", 7),
        ]
        .into_iter()
        .map(|item| (item.id, item))
        .collect()
    }

    /// Counts lookups so tests can see when the catalog is consulted
    struct CountingCatalog {
        inner: BTreeMap<ItemId, ItemDescriptor>,
        lookups: Cell<usize>,
    }

    impl ItemCatalog for CountingCatalog {
        type Error = Infallible;

        fn name_of(&self, id: ItemId) -> Result<String, Infallible> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.name_of(id)
        }
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new();
        assert_eq!(player.hp, 20);
        assert_eq!(player.weapon_type, 0);
        assert_eq!(player.current_weapon_id, "");
        assert_eq!((player.x, player.y), (1, 1));
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_pickup_order_scenario() {
        let catalog = swords();
        let mut player = Player::new();

        assert!(player.add_item(102, &catalog).unwrap().is_added());
        assert_eq!(
            player.add_item(999, &catalog).unwrap(),
            AddItemOutcome::NotInCatalog
        );
        assert!(player.add_item(101, &catalog).unwrap().is_added());

        assert_eq!(
            player.list_inventory(&catalog).unwrap(),
            vec![
                (102, "Iron Sword".to_string()),
                (101, "Wooden Sword".to_string())
            ]
        );
    }

    #[test]
    fn test_inventory_never_exceeds_capacity() {
        let catalog = swords();
        let mut player = Player::new();

        for _ in 0..12 {
            player.add_item(101, &catalog).unwrap();
        }

        assert_eq!(player.inventory().len(), INVENTORY_CAPACITY);
        assert_eq!(
            player.add_item(102, &catalog).unwrap(),
            AddItemOutcome::InventoryFull
        );
        assert!(player.inventory().iter().all(|&id| id == 101));
    }

    #[test]
    fn test_full_inventory_skips_catalog() {
        let catalog = CountingCatalog {
            inner: swords(),
            lookups: Cell::new(0),
        };
        let mut player = Player::new();
        for _ in 0..INVENTORY_CAPACITY {
            player.add_item(103, &catalog).unwrap();
        }
        let before = catalog.lookups.get();

        assert_eq!(
            player.add_item(103, &catalog).unwrap(),
            AddItemOutcome::InventoryFull
        );
        assert_eq!(catalog.lookups.get(), before);
    }

    #[test]
    fn test_unknown_item_leaves_inventory_unchanged() {
        let catalog = swords();
        let mut player = Player::new();
        player.add_item(101, &catalog).unwrap();

        let outcome = player.add_item(4242, &catalog).unwrap();

        assert_eq!(outcome, AddItemOutcome::NotInCatalog);
        assert_eq!(player.inventory(), &[101]);
        assert_eq!(outcome.message(4242), "Item 4242 not in catalog.");
    }

    #[test]
    fn test_duplicates_allowed() {
        let catalog = swords();
        let mut player = Player::new();
        player.add_item(102, &catalog).unwrap();
        player.add_item(102, &catalog).unwrap();

        assert_eq!(player.inventory(), &[102, 102]);
    }

    #[test]
    fn test_inspect_item_does_not_mutate() {
        let catalog = swords();
        let player = Player::new();

        assert_eq!(player.inspect_item(103, &catalog).unwrap(), "Steel Sword");
        assert_eq!(player.inspect_item(7, &catalog).unwrap(), UNKNOWN_ITEM);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_list_inventory_resolves_names_at_call_time() {
        let mut catalog = swords();
        let mut player = Player::new();
        player.add_item(101, &catalog).unwrap();

        catalog.insert(101, ItemDescriptor::new(101, "Charred Stick", 1));

        assert_eq!(
            player.list_inventory(&catalog).unwrap(),
            vec![(101, "Charred Stick".to_string())]
        );
    }
}
