//! Single-record save slot.

use crate::error::Result;
use crate::store::Store;
use ember_core::{Player, SaveRecord};
use log::debug;
use rusqlite::{params, OptionalExtension};

impl Store {
    /// Replace the save record with the player's hp and weapon type.
    ///
    /// Delete and insert run in one transaction: other connections see either
    /// the old record or the new one, never an empty table.
    pub fn save(&self, player: &Player) -> Result<()> {
        let record = SaveRecord::from_player(player);
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM savedData", [])?;
        tx.execute(
            "INSERT INTO savedData (hp, weaponType) VALUES (?1, ?2)",
            params![record.hp, record.weapon_type],
        )?;
        tx.commit()?;
        debug!("Saved hp={} weaponType={}", record.hp, record.weapon_type);
        Ok(())
    }

    /// The current save record, if any.
    pub fn load_record(&self) -> Result<Option<SaveRecord>> {
        let conn = self.connect()?;
        let record = conn
            .query_row(
                "SELECT hp, weaponType FROM savedData LIMIT 1",
                [],
                |row| {
                    Ok(SaveRecord {
                        hp: row.get(0)?,
                        weapon_type: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Restore hp and weapon type into the player.
    ///
    /// Returns `false` and leaves the player untouched when nothing was saved.
    pub fn load(&self, player: &mut Player) -> Result<bool> {
        match self.load_record()? {
            Some(record) => {
                record.apply_to(player);
                debug!("Loaded hp={} weaponType={}", record.hp, record.weapon_type);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> Store {
        Store::open(dir.path().join("game.db")).unwrap()
    }

    fn record_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM savedData", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_round_trip_into_fresh_player() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let mut player = Player::new();
        player.hp = 7;
        player.weapon_type = 2;

        store.save(&player).unwrap();

        let mut fresh = Player::new();
        assert!(store.load(&mut fresh).unwrap());
        assert_eq!(fresh.hp, 7);
        assert_eq!(fresh.weapon_type, 2);
    }

    #[test]
    fn test_load_empty_store_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let mut player = Player::new();
        player.hp = 13;
        player.weapon_type = 4;

        assert!(!store.load(&mut player).unwrap());
        assert_eq!(player.hp, 13);
        assert_eq!(player.weapon_type, 4);
        assert_eq!(store.load_record().unwrap(), None);
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let mut player = Player::new();

        for hp in [20, 15, 3] {
            player.hp = hp;
            store.save(&player).unwrap();
        }

        let conn = store.connect().unwrap();
        assert_eq!(record_count(&conn), 1);
        assert_eq!(
            store.load_record().unwrap(),
            Some(SaveRecord {
                hp: 3,
                weapon_type: 0
            })
        );
    }

    #[test]
    fn test_save_collapses_stray_rows() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store
            .connect()
            .unwrap()
            .execute_batch("INSERT INTO savedData VALUES (1, 1); INSERT INTO savedData VALUES (2, 2);")
            .unwrap();

        store.save(&Player::new()).unwrap();

        assert_eq!(record_count(&store.connect().unwrap()), 1);
    }

    #[test]
    fn test_failed_save_keeps_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.save(&Player::new()).unwrap();
        store
            .connect()
            .unwrap()
            .execute_batch(
                "CREATE TRIGGER reject_low_hp BEFORE INSERT ON savedData
                 WHEN NEW.hp = 1
                 BEGIN SELECT RAISE(ABORT, 'hp rejected'); END;",
            )
            .unwrap();

        let mut player = Player::new();
        player.hp = 1;
        assert!(store.save(&player).is_err());

        assert_eq!(record_count(&store.connect().unwrap()), 1);
        assert_eq!(
            store.load_record().unwrap(),
            Some(SaveRecord {
                hp: 20,
                weapon_type: 0
            })
        );
    }

    #[test]
    fn test_save_leaves_catalog_alone() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.seed_catalog().unwrap();

        store.save(&Player::new()).unwrap();

        assert_eq!(store.all_ids().unwrap().len(), 5);
    }
}
