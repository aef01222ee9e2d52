//! Script-managed world entities

use serde::{Deserialize, Serialize};

/// A hostile creature placed on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: i64,
    pub y: i64,
    pub hp: i64,
    pub damage: i64,
    /// Category tag interpreted by scripts
    pub type_id: i64,
}

impl Enemy {
    /// Create an enemy
    pub fn new(x: i64, y: i64, hp: i64, damage: i64, type_id: i64) -> Self {
        Self {
            x,
            y,
            hp,
            damage,
            type_id,
        }
    }
}

/// A lootable chest; starts full
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chest {
    pub x: i64,
    pub y: i64,
    pub is_empty: bool,
}

impl Chest {
    /// Create a full chest at a position
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            is_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_fields() {
        let enemy = Enemy::new(3, 4, 10, 2, 1);
        assert_eq!((enemy.x, enemy.y), (3, 4));
        assert_eq!(enemy.hp, 10);
        assert_eq!(enemy.damage, 2);
        assert_eq!(enemy.type_id, 1);
    }

    #[test]
    fn test_chest_starts_full() {
        let chest = Chest::new(5, 6);
        assert_eq!((chest.x, chest.y), (5, 6));
        assert!(!chest.is_empty);
    }
}
