//! Persisted slice of player progress

use crate::Player;
use serde::{Deserialize, Serialize};

/// The single saved row: hit points and weapon type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub hp: i64,
    pub weapon_type: i64,
}

impl SaveRecord {
    /// Capture the persisted fields of a player
    pub fn from_player(player: &Player) -> Self {
        Self {
            hp: player.hp,
            weapon_type: player.weapon_type,
        }
    }

    /// Overwrite the persisted fields of a player, leaving the rest alone
    pub fn apply_to(&self, player: &mut Player) {
        player.hp = self.hp;
        player.weapon_type = self.weapon_type;
    }
}
