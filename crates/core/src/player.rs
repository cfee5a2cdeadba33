//! The player's ship.

use serde::{Deserialize, Serialize};
use starlance_types::Difficulty;

/// Weapon fitted to a hardpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weapon {
    Plasma,
    Rockets,
}

/// Player ship state for the duration of a mission.
///
/// Position is in screen pixels; the ship never leaves the visible area
/// except during sector departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub shield: i32,
    pub max_shield: i32,
    /// Plasma cells, then rockets.
    pub ammo: [i32; 2],
    pub weapon_type: [Weapon; 2],
}

impl Player {
    /// Standard loadout; shield capacity scales with difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        let max_shield = match difficulty {
            Difficulty::Easy => 100,
            Difficulty::Normal => 50,
            Difficulty::Hard => 25,
            Difficulty::Nightmare => 1,
        };

        Self {
            x: 0.0,
            y: 0.0,
            shield: max_shield,
            max_shield,
            ammo: [0, 5],
            weapon_type: [Weapon::Plasma, Weapon::Rockets],
        }
    }

    pub fn is_alive(&self) -> bool {
        self.shield > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Difficulty::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_scales_with_difficulty() {
        assert_eq!(Player::new(Difficulty::Easy).max_shield, 100);
        assert_eq!(Player::new(Difficulty::Normal).max_shield, 50);
        assert_eq!(Player::new(Difficulty::Hard).max_shield, 25);
        assert_eq!(Player::new(Difficulty::Nightmare).max_shield, 1);
    }

    #[test]
    fn loadout_starts_with_rockets_only() {
        let player = Player::new(Difficulty::Normal);
        assert_eq!(player.ammo, [0, 5]);
        assert_eq!(player.weapon_type, [Weapon::Plasma, Weapon::Rockets]);
        assert!(player.is_alive());
        assert_eq!(player.shield, player.max_shield);
    }
}
