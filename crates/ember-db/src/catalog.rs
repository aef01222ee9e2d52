//! Item catalog queries.

use crate::error::{Error, Result};
use crate::store::Store;
use ember_core::{ItemCatalog, ItemDescriptor, ItemId, UNKNOWN_ITEM};
use log::debug;
use rusqlite::{params, OptionalExtension};

/// Built-in weapons inserted by `seed_catalog`: (id, name, power).
pub const BUILTIN_ITEMS: &[(ItemId, &str, i64)] = &[
    (101, "Wooden Sword", 2),
    (102, "Iron Sword", 5),
    (103, "Steel Sword", 7),
    (104, "Obsidian Blade", 10),
    (105, "Godly Sword", 20),
];

impl Store {
    /// Create the catalog table if needed and insert the built-in items.
    ///
    /// Rows whose id already exists are left untouched, so repeated calls
    /// converge on the same table.
    pub fn seed_catalog(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS itemRegistry (id INTEGER PRIMARY KEY, name TEXT, power INTEGER)",
            [],
        )?;

        let mut stmt =
            conn.prepare("INSERT OR IGNORE INTO itemRegistry (id, name, power) VALUES (?1, ?2, ?3)")?;
        let mut inserted = 0;
        for (id, name, power) in BUILTIN_ITEMS {
            inserted += stmt.execute(params![id, name, power])?;
        }
        debug!("Catalog seeded ({} new rows)", inserted);
        Ok(())
    }

    /// Name of an item, or `"Unknown"` when no row has this id.
    pub fn name_of(&self, id: ItemId) -> Result<String> {
        let conn = self.connect()?;
        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM itemRegistry WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.unwrap_or_else(|| UNKNOWN_ITEM.to_string()))
    }

    /// Full catalog row for an item.
    pub fn item(&self, id: ItemId) -> Result<Option<ItemDescriptor>> {
        let conn = self.connect()?;
        let item = conn
            .query_row(
                "SELECT id, name, power FROM itemRegistry WHERE id = ?1",
                params![id],
                |row| {
                    Ok(ItemDescriptor {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        power: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(item)
    }

    /// Every catalog id in ascending order.
    pub fn all_ids(&self) -> Result<Vec<ItemId>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id FROM itemRegistry ORDER BY id ASC")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<ItemId>, _>>()?;
        Ok(ids)
    }
}

impl ItemCatalog for Store {
    type Error = Error;

    fn name_of(&self, id: ItemId) -> Result<String> {
        Store::name_of(self, id)
    }
}
